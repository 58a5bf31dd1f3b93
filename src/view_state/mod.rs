use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod id;
pub mod monster_list;

/// Bumped whenever the layout of [`MenuState`] changes.
pub const MENU_STATE_VERSION: u32 = 2;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("malformed menu state: {0}")]
    Json(#[from] serde_json::Error),

    #[error("menu state version {found} is not supported (expected {expected})", expected = MENU_STATE_VERSION)]
    UnsupportedVersion { found: u32 },
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuType {
    IdMenu,
    MonsterListMenu,
}

/// The detail pane an id menu is showing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdPane {
    #[default]
    Id,
    Evos,
    Materials,
    Pic,
    Pantheon,
    OtherInfo,
}

/// Everything a menu message needs to handle its next reaction.
/// Serialized between interactions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MenuState {
    pub version: u32,
    pub menu_type: MenuType,
    pub original_author_id: u64,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub resolved_monster_id: Option<u32>,
    /// candidate monster ids for list menus
    #[serde(default)]
    pub monster_list: Vec<u32>,
    #[serde(default)]
    pub reaction_list: Vec<String>,
    #[serde(default)]
    pub id_pane: IdPane,
    #[serde(default)]
    pub is_child: bool,
    #[serde(default)]
    pub child_message_id: Option<u64>,
    /// the list message a child id menu was selected from
    #[serde(default)]
    pub parent_message_id: Option<u64>,
}

impl MenuState {
    pub fn new_id_menu<S: Into<String>>(
        original_author_id: u64,
        query: S,
        monster_id: u32,
        reaction_list: Vec<String>,
    ) -> Self {
        Self {
            version: MENU_STATE_VERSION,
            menu_type: MenuType::IdMenu,
            original_author_id,
            query: query.into(),
            resolved_monster_id: Some(monster_id),
            monster_list: Vec::new(),
            reaction_list,
            id_pane: IdPane::Id,
            is_child: false,
            child_message_id: None,
            parent_message_id: None,
        }
    }

    pub fn new_monster_list<S: Into<String>>(
        original_author_id: u64,
        query: S,
        monster_list: Vec<u32>,
        reaction_list: Vec<String>,
    ) -> Self {
        Self {
            version: MENU_STATE_VERSION,
            menu_type: MenuType::MonsterListMenu,
            original_author_id,
            query: query.into(),
            resolved_monster_id: None,
            monster_list,
            reaction_list,
            id_pane: IdPane::Id,
            is_child: false,
            child_message_id: None,
            parent_message_id: None,
        }
    }

    /// A child id menu for the monster this list menu has selected.
    pub fn child_id_menu(&self, reaction_list: Vec<String>) -> Option<Self> {
        let monster_id = self.resolved_monster_id?;
        let mut child = Self::new_id_menu(
            self.original_author_id,
            self.query.clone(),
            monster_id,
            reaction_list,
        );
        child.is_child = true;
        Some(child)
    }

    /// The message whose lock guards this menu: the parent for a child, itself otherwise.
    pub fn root_message_id(&self, message_id: u64) -> u64 {
        self.parent_message_id.unwrap_or(message_id)
    }

    pub fn serialize(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn deserialize(blob: &str) -> Result<Self, StateError> {
        let state: MenuState = serde_json::from_str(blob)?;
        if state.version != MENU_STATE_VERSION {
            return Err(StateError::UnsupportedVersion {
                found: state.version,
            });
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_round_trips_through_json() {
        let mut state = MenuState::new_monster_list(42, "tyr", vec![1, 2, 3], vec!["🏠".to_string()]);
        state.child_message_id = Some(99);
        let blob = state.serialize().unwrap();
        assert_eq!(MenuState::deserialize(&blob).unwrap(), state);
    }

    #[test]
    fn rejects_other_versions() {
        let mut state = MenuState::new_id_menu(42, "tyr", 1, Vec::new());
        state.version = MENU_STATE_VERSION + 1;
        let blob = serde_json::to_string(&state).unwrap();
        assert!(matches!(
            MenuState::deserialize(&blob),
            Err(StateError::UnsupportedVersion { found }) if found == MENU_STATE_VERSION + 1
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(MenuState::deserialize("{}"), Err(StateError::Json(_))));
        assert!(matches!(MenuState::deserialize(""), Err(StateError::Json(_))));
    }

    #[test]
    fn child_needs_a_selection() {
        let mut list = MenuState::new_monster_list(42, "tyr", vec![1, 2], Vec::new());
        assert!(list.child_id_menu(Vec::new()).is_none());

        list.resolved_monster_id = Some(2);
        let child = list.child_id_menu(vec!["🏠".to_string()]).unwrap();
        assert_eq!(child.menu_type, MenuType::IdMenu);
        assert_eq!(child.resolved_monster_id, Some(2));
        assert!(child.is_child);
        assert_eq!(child.original_author_id, 42);
        // linked by the store once the child message exists
        assert_eq!(child.parent_message_id, None);
    }

    #[test]
    fn children_are_rooted_at_their_parent() {
        let list = MenuState::new_monster_list(42, "tyr", vec![1], Vec::new());
        assert_eq!(list.root_message_id(10), 10);

        let mut child = MenuState::new_id_menu(42, "tyr", 1, Vec::new());
        child.parent_message_id = Some(10);
        assert_eq!(child.root_message_id(11), 10);
    }
}
