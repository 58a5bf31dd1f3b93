use crate::menu::id::{IdMenu, IdMenuPanes};
use crate::menu::pane_names::{GlobalEmoji, MonsterListPaneNames};
use crate::menu::panes::{PaneEntry, PaneRegistry};
use crate::menu::{EmbedControl, EmbedMenu, MenuData, MenuResponse, MenuTarget};
use crate::view_state::monster_list::MonsterListViewState;
use crate::view_state::{MenuState, MenuType};
use crate::views::monster_list::MonsterListView;

/// The number of numbered selectors a list menu has.
pub const MAX_LIST_SIZE: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonsterListPane {
    MonsterList,
    Select(usize),
    Refresh,
    Reset,
}

const fn select(n: usize, emoji: &'static str) -> PaneEntry<MonsterListPane> {
    PaneEntry {
        pane: MonsterListPane::Select(n),
        emoji,
        name: MonsterListPaneNames::ID,
    }
}

pub struct MonsterListMenuPanes;

impl MonsterListMenuPanes {
    pub const INITIAL_EMOJI: &'static str = GlobalEmoji::HOME;

    pub const REGISTRY: PaneRegistry<MonsterListPane> = PaneRegistry {
        entries: &[
            PaneEntry {
                pane: MonsterListPane::MonsterList,
                emoji: GlobalEmoji::HOME,
                name: MonsterListPaneNames::HOME,
            },
            select(0, "0\u{FE0F}\u{20E3}"),
            select(1, "1\u{FE0F}\u{20E3}"),
            select(2, "2\u{FE0F}\u{20E3}"),
            select(3, "3\u{FE0F}\u{20E3}"),
            select(4, "4\u{FE0F}\u{20E3}"),
            select(5, "5\u{FE0F}\u{20E3}"),
            select(6, "6\u{FE0F}\u{20E3}"),
            select(7, "7\u{FE0F}\u{20E3}"),
            select(8, "8\u{FE0F}\u{20E3}"),
            select(9, "9\u{FE0F}\u{20E3}"),
            select(10, "\u{1F51F}"),
            PaneEntry {
                pane: MonsterListPane::Refresh,
                emoji: GlobalEmoji::REFRESH,
                name: MonsterListPaneNames::REFRESH,
            },
            PaneEntry {
                pane: MonsterListPane::Reset,
                emoji: GlobalEmoji::RESET,
                name: MonsterListPaneNames::RESET,
            },
        ],
        hidden: &[
            MonsterListPaneNames::HOME,
            MonsterListPaneNames::REFRESH,
            MonsterListPaneNames::RESET,
        ],
    };

    pub fn emoji_names() -> Vec<String> {
        Self::REGISTRY.emoji_names()
    }

    /// One numbered reaction per listed monster.
    pub fn get_initial_reaction_list(number_of_monsters: usize) -> Vec<String> {
        Self::emoji_names()
            .into_iter()
            .take(number_of_monsters)
            .collect()
    }

    pub fn emoji_name_to_emoji(name: &str) -> Option<&'static str> {
        Self::REGISTRY.emoji_name_to_emoji(name)
    }

    pub fn emoji_name_to_function(name: &str) -> Option<MonsterListPane> {
        Self::REGISTRY.emoji_name_to_function(name)
    }
}

pub struct MonsterListMenu;

impl MonsterListMenu {
    pub const MENU_TYPE: MenuType = MenuType::MonsterListMenu;
    pub const CHILD_MENU_TYPE: MenuType = MenuType::IdMenu;

    pub fn panes() -> &'static PaneRegistry<MonsterListPane> {
        &MonsterListMenuPanes::REGISTRY
    }

    pub fn menu(original_author_id: u64, friend_ids: Vec<u64>, bot_id: u64) -> EmbedMenu {
        let valid_emoji = Self::panes()
            .entries
            .iter()
            .map(|e| e.emoji.to_string())
            .collect();
        EmbedMenu::new(
            Self::MENU_TYPE,
            valid_emoji,
            original_author_id,
            friend_ids,
            bot_id,
        )
    }

    pub async fn respond(
        pane: MonsterListPane,
        ims: &mut MenuState,
        data: &MenuData<'_>,
    ) -> Option<MenuResponse> {
        match pane {
            MonsterListPane::MonsterList => Self::respond_with_monster_list(ims, data).await,
            MonsterListPane::Select(n) => Self::respond_with_n(ims, n, data).await,
            MonsterListPane::Refresh => Self::respond_with_refresh(ims, data).await,
            MonsterListPane::Reset => Self::respond_with_reset(ims, data).await,
        }
    }

    /// Re-renders the list as it is.
    pub async fn respond_with_refresh(
        ims: &mut MenuState,
        data: &MenuData<'_>,
    ) -> Option<MenuResponse> {
        Self::respond_with_monster_list(ims, data).await
    }

    /// Back to the overview, dropping the selection.
    pub async fn respond_with_reset(
        ims: &mut MenuState,
        data: &MenuData<'_>,
    ) -> Option<MenuResponse> {
        ims.resolved_monster_id = None;
        Self::respond_with_monster_list(ims, data).await
    }

    pub async fn respond_with_monster_list(
        ims: &mut MenuState,
        data: &MenuData<'_>,
    ) -> Option<MenuResponse> {
        let view_state = MonsterListViewState::deserialize(data.db, ims).await?;
        let control = Self::monster_list_control(&view_state);
        Some(MenuResponse::current(ims, control))
    }

    /// Shows the n-th listed monster in the child id menu, creating it if there is none yet.
    pub async fn respond_with_n(
        ims: &mut MenuState,
        n: usize,
        data: &MenuData<'_>,
    ) -> Option<MenuResponse> {
        let monster_id = *ims.monster_list.get(n)?;
        ims.resolved_monster_id = Some(monster_id);
        let reaction_list = IdMenuPanes::emoji_names();

        match data.child {
            Some((child_message_id, child_ims)) if child_ims.menu_type == Self::CHILD_MENU_TYPE => {
                let mut child_ims = child_ims.clone();
                child_ims.reaction_list = reaction_list;
                child_ims.resolved_monster_id = Some(monster_id);
                let mut response = IdMenu::respond_with_refresh(&mut child_ims, data).await?;
                response.target = MenuTarget::Child(child_message_id);
                Some(response)
            }
            _ => {
                // no child yet, start it on the overview pane
                let mut child_ims = ims.child_id_menu(reaction_list)?;
                let mut response = IdMenu::respond_with_current_id(&mut child_ims, data).await?;
                response.target = MenuTarget::NewChild;
                Some(response)
            }
        }
    }

    pub fn monster_list_control(state: &MonsterListViewState) -> EmbedControl {
        EmbedControl::new(
            vec![MonsterListView::embed(state)],
            state.reaction_list.clone(),
        )
    }
}
