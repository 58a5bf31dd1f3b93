use serenity::all::CreateEmbed;

use crate::monster_data::MonsterSource;
use crate::view_state::{MenuState, MenuType};

use self::id::IdMenu;
use self::monster_list::MonsterListMenu;
use self::pane_names::GlobalEmoji;
use self::reaction_filter::{
    BotAuthoredMessageReactionFilter, FriendReactionFilter, MessageOwnerReactionFilter,
    NotPosterEmojiReactionFilter, ReactionContext, ReactionFilter, ValidEmojiReactionFilter,
};

pub mod id;
pub mod monster_list;
pub mod pane_names;
pub mod panes;
pub mod reaction_filter;
pub mod reaction_list;

pub struct EmbedMenuEmojiConfig {
    pub delete_message: &'static str,
}

pub const MENU_EMOJI_CONFIG: EmbedMenuEmojiConfig = EmbedMenuEmojiConfig {
    delete_message: GlobalEmoji::DELETE,
};

/// What to show: the embeds and the reactions allowed next.
#[derive(Debug, Clone)]
pub struct EmbedControl {
    pub embeds: Vec<CreateEmbed>,
    pub reaction_list: Vec<String>,
}

impl EmbedControl {
    pub fn new(embeds: Vec<CreateEmbed>, reaction_list: Vec<String>) -> Self {
        Self {
            embeds,
            reaction_list,
        }
    }
}

/// Which message a response renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    /// the message that was reacted to
    Current,
    /// a new message linked as the child of the reacted message
    NewChild,
    /// the existing child message with this id
    Child(u64),
}

#[derive(Debug, Clone)]
pub struct MenuResponse {
    pub target: MenuTarget,
    /// state to store for the target message
    pub state: MenuState,
    pub control: EmbedControl,
}

impl MenuResponse {
    pub fn current(state: &MenuState, control: EmbedControl) -> Self {
        Self {
            target: MenuTarget::Current,
            state: state.clone(),
            control,
        }
    }
}

#[derive(Debug)]
pub enum MenuAction {
    Ignore,
    Delete,
    Respond(MenuResponse),
}

/// Collaborators a transition can use besides the message's own state.
pub struct MenuData<'a> {
    pub db: &'a dyn MonsterSource,
    /// the child message id and its state, when the message has a child menu
    pub child: Option<(u64, &'a MenuState)>,
}

pub struct EmbedMenu {
    menu_type: MenuType,
    filters: Vec<Box<dyn ReactionFilter>>,
    emoji_config: EmbedMenuEmojiConfig,
}

impl EmbedMenu {
    pub fn new(
        menu_type: MenuType,
        valid_emoji: Vec<String>,
        original_author_id: u64,
        friend_ids: Vec<u64>,
        bot_id: u64,
    ) -> Self {
        let emoji_config = MENU_EMOJI_CONFIG;
        let mut valid_emoji = valid_emoji;
        valid_emoji.push(emoji_config.delete_message.to_string());

        let filters: Vec<Box<dyn ReactionFilter>> = vec![
            Box::new(ValidEmojiReactionFilter::new(valid_emoji)),
            Box::new(NotPosterEmojiReactionFilter::new(bot_id)),
            Box::new(BotAuthoredMessageReactionFilter::new(bot_id)),
            Box::new(MessageOwnerReactionFilter::new(
                original_author_id,
                Some(Box::new(FriendReactionFilter::new(friend_ids))),
            )),
        ];

        Self {
            menu_type,
            filters,
            emoji_config,
        }
    }

    /// The menu that handles reactions on a message with this state.
    pub fn for_state(ims: &MenuState, friend_ids: Vec<u64>, bot_id: u64) -> Self {
        match ims.menu_type {
            MenuType::IdMenu => IdMenu::menu(ims.original_author_id, friend_ids, bot_id),
            MenuType::MonsterListMenu => {
                MonsterListMenu::menu(ims.original_author_id, friend_ids, bot_id)
            }
        }
    }

    pub fn accepts(&self, reaction: &ReactionContext) -> bool {
        self.filters.iter().all(|filter| filter.allow(reaction))
    }

    pub async fn transition(
        &self,
        emoji: &str,
        ims: &mut MenuState,
        data: &MenuData<'_>,
    ) -> MenuAction {
        if emoji == self.emoji_config.delete_message {
            return MenuAction::Delete;
        }

        let response = match self.menu_type {
            MenuType::IdMenu => match IdMenu::panes().transition(emoji) {
                Some(pane) => IdMenu::respond(pane, ims, data).await,
                None => None,
            },
            MenuType::MonsterListMenu => match MonsterListMenu::panes().transition(emoji) {
                Some(pane) => MonsterListMenu::respond(pane, ims, data).await,
                None => None,
            },
        };

        match response {
            Some(response) => MenuAction::Respond(response),
            None => MenuAction::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::monster_list::MonsterListMenuPanes;
    use crate::monster_data::tests::sample_database;

    const BOT: u64 = 1;
    const OWNER: u64 = 2;

    fn reaction(emoji: &str, reactor_id: u64) -> ReactionContext {
        ReactionContext {
            emoji: emoji.to_string(),
            reactor_id,
            message_author_id: BOT,
        }
    }

    #[test]
    fn delete_glyph_is_always_valid() {
        let ims = MenuState::new_monster_list(OWNER, "tyr", vec![1], Vec::new());
        let menu = EmbedMenu::for_state(&ims, Vec::new(), BOT);
        assert!(menu.accepts(&reaction(GlobalEmoji::DELETE, OWNER)));
        assert!(menu.accepts(&reaction(GlobalEmoji::RESET, OWNER)));
        assert!(!menu.accepts(&reaction("\u{1F36A}", OWNER)));
        assert!(!menu.accepts(&reaction(GlobalEmoji::DELETE, BOT)));
    }

    #[tokio::test]
    async fn dispatches_by_menu_type() {
        let db = sample_database();
        let data = MenuData { db: &db, child: None };
        let mut ims = MenuState::new_monster_list(OWNER, "tyr", vec![1, 2], Vec::new());
        let menu = EmbedMenu::for_state(&ims, Vec::new(), BOT);

        assert!(matches!(
            menu.transition(GlobalEmoji::DELETE, &mut ims, &data).await,
            MenuAction::Delete
        ));
        assert!(matches!(
            menu.transition("\u{1F36A}", &mut ims, &data).await,
            MenuAction::Ignore
        ));

        let one = MonsterListMenuPanes::emoji_names()[1].clone();
        let MenuAction::Respond(response) = menu.transition(&one, &mut ims, &data).await else {
            panic!("expected a response to a numbered reaction");
        };
        assert_eq!(response.target, MenuTarget::NewChild);
        assert_eq!(response.state.resolved_monster_id, Some(2));
    }
}
