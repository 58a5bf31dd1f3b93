use crate::menu::pane_names::{GlobalEmoji, IdMenuPaneNames};
use crate::menu::panes::{PaneEntry, PaneRegistry};
use crate::menu::{EmbedControl, EmbedMenu, MenuData, MenuResponse};
use crate::view_state::id::IdViewState;
use crate::view_state::{IdPane, MenuState, MenuType};
use crate::views::id::IdView;

pub struct IdMenuEmoji;

impl IdMenuEmoji {
    pub const LEFT: &'static str = "\u{25C0}\u{FE0F}";
    pub const RIGHT: &'static str = "\u{25B6}\u{FE0F}";
    pub const HOME: &'static str = GlobalEmoji::HOME;
    pub const EVOS: &'static str = "\u{1F53B}";
    pub const MATS: &'static str = "\u{1F3FA}";
    pub const PIC: &'static str = "\u{1F5BC}\u{FE0F}";
    pub const PANTHEON: &'static str = "\u{1F3DB}\u{FE0F}";
    pub const OTHER_INFO: &'static str = "\u{1F4DC}";
    pub const REFRESH: &'static str = GlobalEmoji::REFRESH;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdMenuPane {
    Left,
    Right,
    CurrentId,
    Evos,
    Materials,
    Pic,
    Pantheon,
    OtherInfo,
    Refresh,
}

pub struct IdMenuPanes;

impl IdMenuPanes {
    pub const REGISTRY: PaneRegistry<IdMenuPane> = PaneRegistry {
        entries: &[
            PaneEntry { pane: IdMenuPane::Left, emoji: IdMenuEmoji::LEFT, name: IdMenuPaneNames::LEFT },
            PaneEntry { pane: IdMenuPane::Right, emoji: IdMenuEmoji::RIGHT, name: IdMenuPaneNames::RIGHT },
            PaneEntry { pane: IdMenuPane::CurrentId, emoji: IdMenuEmoji::HOME, name: IdMenuPaneNames::ID },
            PaneEntry { pane: IdMenuPane::Evos, emoji: IdMenuEmoji::EVOS, name: IdMenuPaneNames::EVOS },
            PaneEntry { pane: IdMenuPane::Materials, emoji: IdMenuEmoji::MATS, name: IdMenuPaneNames::MATERIALS },
            PaneEntry { pane: IdMenuPane::Pic, emoji: IdMenuEmoji::PIC, name: IdMenuPaneNames::PIC },
            PaneEntry { pane: IdMenuPane::Pantheon, emoji: IdMenuEmoji::PANTHEON, name: IdMenuPaneNames::PANTHEON },
            PaneEntry { pane: IdMenuPane::OtherInfo, emoji: IdMenuEmoji::OTHER_INFO, name: IdMenuPaneNames::OTHER_INFO },
            PaneEntry { pane: IdMenuPane::Refresh, emoji: IdMenuEmoji::REFRESH, name: IdMenuPaneNames::REFRESH },
        ],
        hidden: &[IdMenuPaneNames::REFRESH],
    };

    pub fn emoji_names() -> Vec<String> {
        Self::REGISTRY.emoji_names()
    }
}

pub struct IdMenu;

impl IdMenu {
    pub const MENU_TYPE: MenuType = MenuType::IdMenu;

    pub fn panes() -> &'static PaneRegistry<IdMenuPane> {
        &IdMenuPanes::REGISTRY
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
        pane: IdMenuPane,
        ims: &mut MenuState,
        data: &MenuData<'_>,
    ) -> Option<MenuResponse> {
        match pane {
            IdMenuPane::Left => Self::respond_with_scroll(ims, data, false).await,
            IdMenuPane::Right => Self::respond_with_scroll(ims, data, true).await,
            IdMenuPane::CurrentId => Self::respond_with_current_id(ims, data).await,
            IdMenuPane::Evos => Self::respond_with_pane(ims, IdPane::Evos, data).await,
            IdMenuPane::Materials => Self::respond_with_pane(ims, IdPane::Materials, data).await,
            IdMenuPane::Pic => Self::respond_with_pane(ims, IdPane::Pic, data).await,
            IdMenuPane::Pantheon => Self::respond_with_pane(ims, IdPane::Pantheon, data).await,
            IdMenuPane::OtherInfo => Self::respond_with_pane(ims, IdPane::OtherInfo, data).await,
            IdMenuPane::Refresh => Self::respond_with_refresh(ims, data).await,
        }
    }

    pub async fn respond_with_current_id(
        ims: &mut MenuState,
        data: &MenuData<'_>,
    ) -> Option<MenuResponse> {
        Self::respond_with_pane(ims, IdPane::Id, data).await
    }

    /// Re-renders whichever pane the menu is on.
    pub async fn respond_with_refresh(
        ims: &mut MenuState,
        data: &MenuData<'_>,
    ) -> Option<MenuResponse> {
        let control = Self::id_control(ims, data).await?;
        Some(MenuResponse::current(ims, control))
    }

    async fn respond_with_pane(
        ims: &mut MenuState,
        pane: IdPane,
        data: &MenuData<'_>,
    ) -> Option<MenuResponse> {
        ims.id_pane = pane;
        Self::respond_with_refresh(ims, data).await
    }

    /// Moves through the evolution tree, wrapping at either end, and stays on the same pane.
    async fn respond_with_scroll(
        ims: &mut MenuState,
        data: &MenuData<'_>,
        forward: bool,
    ) -> Option<MenuResponse> {
        let monster = data.db.get_monster(ims.resolved_monster_id?).await?;
        let tree = data.db.get_alt_versions(&monster).await;
        let len = tree.len();
        if len > 1 {
            if let Some(pos) = tree.iter().position(|m| m.monster_id == monster.monster_id) {
                let next = if forward {
                    (pos + 1) % len
                } else {
                    (pos + len - 1) % len
                };
                ims.resolved_monster_id = Some(tree[next].monster_id);
            }
        }
        Self::respond_with_refresh(ims, data).await
    }

    async fn id_control(ims: &MenuState, data: &MenuData<'_>) -> Option<EmbedControl> {
        let state = IdViewState::deserialize(data.db, ims).await?;
        Some(EmbedControl::new(
            vec![IdView::embed(&state)],
            state.reaction_list.clone(),
        ))
    }
}
