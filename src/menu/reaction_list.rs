use crate::menu::id::{IdMenuEmoji, IdMenuPanes};
use crate::monster_data::{MonsterModel, MonsterSource};
use crate::view_state::id::{EvosQuery, MaterialsQuery, PantheonQuery};

fn remove(reaction_list: &mut Vec<String>, emoji: &str) {
    reaction_list.retain(|e| e != emoji);
}

/// The id menu reactions worth offering for a monster.
///
/// Outside evo scroll mode the list is returned as is. In evo scroll mode, navigation to
/// panes with nothing to show is dropped: scrolling and evos without alternate or gem
/// versions, pantheon without a pantheon, materials without any material data.
pub async fn get_id_menu_initial_reaction_list(
    db: &dyn MonsterSource,
    monster: &MonsterModel,
    full_reaction_list: Option<Vec<String>>,
    evoscroll: bool,
) -> Vec<String> {
    let mut reaction_list = match full_reaction_list {
        Some(list) if !list.is_empty() => list,
        _ => IdMenuPanes::emoji_names(),
    };
    if !evoscroll {
        return reaction_list;
    }

    if EvosQuery::do_query(db, monster).await.is_empty() {
        remove(&mut reaction_list, IdMenuEmoji::LEFT);
        remove(&mut reaction_list, IdMenuEmoji::RIGHT);
        remove(&mut reaction_list, IdMenuEmoji::EVOS);
    }
    if PantheonQuery::do_query(db, monster).await.pantheon_list.is_none() {
        remove(&mut reaction_list, IdMenuEmoji::PANTHEON);
    }
    if MaterialsQuery::do_query(db, monster).await.is_empty() {
        remove(&mut reaction_list, IdMenuEmoji::MATS);
    }
    reaction_list
}
