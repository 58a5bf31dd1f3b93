use serenity::all::CreateEmbedFooter;

use crate::monster_data::MonsterModel;

pub mod id;
pub mod monster_list;

/// Discord rejects embed field values longer than this.
pub const MAX_FIELD_LEN: usize = 1024;

pub fn monster_line(monster: &MonsterModel) -> String {
    format!("`#{}` {}", monster.monster_id, monster.name_en)
}

/// One line per monster, cut off before the field limit.
pub fn monster_lines(monsters: &[MonsterModel]) -> String {
    let mut lines = String::new();
    for monster in monsters {
        let line = monster_line(monster);
        if lines.len() + line.len() + 1 > MAX_FIELD_LEN {
            break;
        }
        if !lines.is_empty() {
            lines.push('\n');
        }
        lines.push_str(&line);
    }
    lines
}

pub fn query_footer_text(query: &str) -> String {
    format!("Requested with query: {}", query)
}

pub fn query_footer(query: &str) -> CreateEmbedFooter {
    CreateEmbedFooter::new(query_footer_text(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster_data::tests::monster;

    #[test]
    fn lines_stop_at_the_limit() {
        let monsters: Vec<MonsterModel> = (0..1000).map(|id| monster(id, "A Fairly Long Monster Name", id)).collect();
        let lines = monster_lines(&monsters);
        assert!(lines.len() <= MAX_FIELD_LEN);
        assert!(lines.starts_with("`#0` A Fairly Long Monster Name\n`#1`"));
    }
}
