/// The parts of a reaction event the filters look at.
#[derive(Debug, Clone)]
pub struct ReactionContext {
    pub emoji: String,
    pub reactor_id: u64,
    pub message_author_id: u64,
}

pub trait ReactionFilter: Send + Sync {
    fn allow(&self, reaction: &ReactionContext) -> bool;
}

pub struct ValidEmojiReactionFilter {
    valid_emoji: Vec<String>,
}

impl ValidEmojiReactionFilter {
    pub fn new(valid_emoji: Vec<String>) -> Self {
        Self { valid_emoji }
    }
}

impl ReactionFilter for ValidEmojiReactionFilter {
    fn allow(&self, reaction: &ReactionContext) -> bool {
        self.valid_emoji.contains(&reaction.emoji)
    }
}

/// Ignores the reactions the bot adds to its own menus.
pub struct NotPosterEmojiReactionFilter {
    bot_id: u64,
}

impl NotPosterEmojiReactionFilter {
    pub fn new(bot_id: u64) -> Self {
        Self { bot_id }
    }
}

impl ReactionFilter for NotPosterEmojiReactionFilter {
    fn allow(&self, reaction: &ReactionContext) -> bool {
        reaction.reactor_id != self.bot_id
    }
}

pub struct BotAuthoredMessageReactionFilter {
    bot_id: u64,
}

impl BotAuthoredMessageReactionFilter {
    pub fn new(bot_id: u64) -> Self {
        Self { bot_id }
    }
}

impl ReactionFilter for BotAuthoredMessageReactionFilter {
    fn allow(&self, reaction: &ReactionContext) -> bool {
        reaction.message_author_id == self.bot_id
    }
}

pub struct FriendReactionFilter {
    friend_ids: Vec<u64>,
}

impl FriendReactionFilter {
    pub fn new(friend_ids: Vec<u64>) -> Self {
        Self { friend_ids }
    }
}

impl ReactionFilter for FriendReactionFilter {
    fn allow(&self, reaction: &ReactionContext) -> bool {
        self.friend_ids.contains(&reaction.reactor_id)
    }
}

/// Lets the menu's owner through, and anyone the fallback filter allows.
pub struct MessageOwnerReactionFilter {
    owner_id: u64,
    fallback: Option<Box<dyn ReactionFilter>>,
}

impl MessageOwnerReactionFilter {
    pub fn new(owner_id: u64, fallback: Option<Box<dyn ReactionFilter>>) -> Self {
        Self { owner_id, fallback }
    }
}

impl ReactionFilter for MessageOwnerReactionFilter {
    fn allow(&self, reaction: &ReactionContext) -> bool {
        reaction.reactor_id == self.owner_id
            || self
                .fallback
                .as_ref()
                .is_some_and(|filter| filter.allow(reaction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: u64 = 1;
    const OWNER: u64 = 2;
    const FRIEND: u64 = 3;
    const STRANGER: u64 = 4;

    fn reaction(emoji: &str, reactor_id: u64) -> ReactionContext {
        ReactionContext {
            emoji: emoji.to_string(),
            reactor_id,
            message_author_id: BOT,
        }
    }

    #[test]
    fn owner_and_friends_only() {
        let filter = MessageOwnerReactionFilter::new(
            OWNER,
            Some(Box::new(FriendReactionFilter::new(vec![FRIEND]))),
        );
        assert!(filter.allow(&reaction("a", OWNER)));
        assert!(filter.allow(&reaction("a", FRIEND)));
        assert!(!filter.allow(&reaction("a", STRANGER)));

        let no_friends = MessageOwnerReactionFilter::new(OWNER, None);
        assert!(!no_friends.allow(&reaction("a", FRIEND)));
    }

    #[test]
    fn bot_reactions_and_foreign_messages_are_ignored() {
        assert!(!NotPosterEmojiReactionFilter::new(BOT).allow(&reaction("a", BOT)));
        assert!(NotPosterEmojiReactionFilter::new(BOT).allow(&reaction("a", OWNER)));

        let mut foreign = reaction("a", OWNER);
        foreign.message_author_id = STRANGER;
        assert!(!BotAuthoredMessageReactionFilter::new(BOT).allow(&foreign));
    }

    #[test]
    fn only_known_emoji() {
        let filter = ValidEmojiReactionFilter::new(vec!["a".to_string()]);
        assert!(filter.allow(&reaction("a", OWNER)));
        assert!(!filter.allow(&reaction("b", OWNER)));
    }
}
