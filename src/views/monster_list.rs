use serenity::all::{Colour, CreateEmbed};

use crate::menu::monster_list::MonsterListMenuPanes;
use crate::view_state::monster_list::MonsterListViewState;
use crate::views::{monster_line, query_footer};

pub struct MonsterListView;

impl MonsterListView {
    pub fn embed(state: &MonsterListViewState) -> CreateEmbed {
        CreateEmbed::new()
            .title(format!("Monsters matching \"{}\"", state.query))
            .description(Self::description(state))
            .color(Colour::DARK_TEAL)
            .footer(query_footer(&state.query))
    }

    fn description(state: &MonsterListViewState) -> String {
        let glyphs = MonsterListMenuPanes::emoji_names();
        state
            .monsters
            .iter()
            .zip(glyphs.iter())
            .map(|((monster_id, monster), glyph)| {
                let line = match monster {
                    Some(monster) => monster_line(monster),
                    None => format!("`#{}` (unknown monster)", monster_id),
                };
                // bold the one showing in the child menu
                if state.selected_monster_id == Some(*monster_id) {
                    format!("{} **{}**", glyph, line)
                } else {
                    format!("{} {}", glyph, line)
                }
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}
