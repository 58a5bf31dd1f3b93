use crate::monster_data::{MonsterModel, MonsterSource};
use crate::view_state::MenuState;

#[derive(Debug, Clone)]
pub struct MonsterListViewState {
    pub query: String,
    /// aligned with the numbered reactions, `None` for ids missing from the data
    pub monsters: Vec<(u32, Option<MonsterModel>)>,
    pub selected_monster_id: Option<u32>,
    pub reaction_list: Vec<String>,
}

impl MonsterListViewState {
    pub async fn deserialize(db: &dyn MonsterSource, ims: &MenuState) -> Option<Self> {
        if ims.monster_list.is_empty() {
            return None;
        }

        let mut monsters = Vec::with_capacity(ims.monster_list.len());
        for monster_id in &ims.monster_list {
            monsters.push((*monster_id, db.get_monster(*monster_id).await));
        }

        Some(Self {
            query: ims.query.clone(),
            monsters,
            selected_monster_id: ims.resolved_monster_id,
            reaction_list: ims.reaction_list.clone(),
        })
    }
}
