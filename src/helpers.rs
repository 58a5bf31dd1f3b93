use serenity::all::{Command, CommandInteraction, CreateCommand, Message, ReactionType};
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::client::Context;

use crate::{hey, nay};

pub async fn command_response<S: Into<String>>(
    ctx: &Context,
    command: &CommandInteraction,
    msg: S,
) {
    let data = CreateInteractionResponseMessage::new().content(msg.into());
    let builder = CreateInteractionResponse::Message(data);
    if let Err(err) = command.create_response(&ctx.http, builder).await {
        nay!("Failed to respond to command: {}", err)
    }
}

pub async fn register_command(ctx: &Context, cmd: CreateCommand) {
    if let Err(e) = Command::create_global_command(&ctx.http, cmd).await {
        nay!("Failed to register a command: {}", e);
    }
}

/// Glyphs to take off and glyphs to add to go from one reaction list to another.
pub fn reaction_diff(old: &[String], new: &[String]) -> (Vec<String>, Vec<String>) {
    let to_remove = old.iter().filter(|e| !new.contains(e)).cloned().collect();
    let to_add = new.iter().filter(|e| !old.contains(e)).cloned().collect();
    (to_remove, to_add)
}

pub async fn react_all(ctx: &Context, msg: &Message, emoji: &[String]) {
    for glyph in emoji {
        if let Err(e) = msg
            .react(&ctx.http, ReactionType::Unicode(glyph.clone()))
            .await
        {
            nay!("Failed to add reaction {}: {}", glyph, e);
        }
    }
}

/// Moves the bot's reactions on a menu message from `old` to `new`.
pub async fn sync_reactions(ctx: &Context, msg: &Message, old: &[String], new: &[String]) {
    let (to_remove, to_add) = reaction_diff(old, new);
    for glyph in to_remove {
        let removed = msg
            .channel_id
            .delete_reaction_emoji(&ctx.http, msg.id, ReactionType::Unicode(glyph.clone()))
            .await;
        if let Err(e) = removed {
            hey!("Failed to remove reaction {}: {}", glyph, e);
        }
    }
    react_all(ctx, msg, &to_add).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn diff_only_touches_what_changed() {
        let (remove, add) = reaction_diff(&glyphs(&["a", "b", "c"]), &glyphs(&["b", "c", "d"]));
        assert_eq!(remove, glyphs(&["a"]));
        assert_eq!(add, glyphs(&["d"]));

        let (remove, add) = reaction_diff(&glyphs(&["a"]), &glyphs(&["a"]));
        assert!(remove.is_empty() && add.is_empty());
    }
}
