use std::sync::Arc;

use serenity::{
    all::{
        ActivityData, Context, CreateMessage, EditMessage, EventHandler, Interaction, Message,
        MessageId, OnlineStatus, Reaction, ReactionType, Ready, ResumedEvent,
    },
    async_trait,
};

use crate::{
    commands,
    config::ConfigSettings,
    helpers::{command_response, react_all, register_command, sync_reactions},
    hey,
    menu::{
        reaction_filter::ReactionContext, EmbedMenu, MenuAction, MenuData, MenuResponse,
        MenuTarget, MENU_EMOJI_CONFIG,
    },
    menu_store::MenuStore,
    monster_data::MonsterDatabase,
    nay, say,
    view_state::MenuState,
    yay,
};

pub(crate) struct Handler {
    pub db: Arc<MonsterDatabase>,
    pub menus: Arc<MenuStore>,
    pub config: Arc<ConfigSettings>,
}

impl Handler {
    async fn handle_reaction(&self, ctx: &Context, reaction: &Reaction) {
        let Some(user_id) = reaction.user_id else {
            return;
        };
        let bot_id = ctx.cache.current_user().id.get();
        // the bot reacting to its own menus
        if user_id.get() == bot_id {
            return;
        }
        let ReactionType::Unicode(emoji) = &reaction.emoji else {
            return;
        };
        let message_id = reaction.message_id.get();
        let Some(_guard) = self.menus.lock_menu(message_id).await else {
            return;
        };
        let Some(mut ims) = self.menus.get(message_id).await else {
            return;
        };

        let message = match reaction.message(&ctx.http).await {
            Ok(message) => message,
            Err(e) => {
                nay!("Failed to fetch menu message {}: {}", message_id, e);
                return;
            }
        };

        let friend_ids = self.config.get_friend_ids(ims.original_author_id);
        let menu = EmbedMenu::for_state(&ims, friend_ids, bot_id);
        let context = ReactionContext {
            emoji: emoji.clone(),
            reactor_id: user_id.get(),
            message_author_id: message.author.id.get(),
        };
        if !menu.accepts(&context) {
            return;
        }

        let child = match ims.child_message_id {
            Some(child_id) => self.menus.get(child_id).await.map(|state| (child_id, state)),
            None => None,
        };
        let data = MenuData {
            db: self.db.as_ref(),
            child: child.as_ref().map(|(id, state)| (*id, state)),
        };
        let previous_reactions = ims.reaction_list.clone();

        match menu.transition(emoji, &mut ims, &data).await {
            MenuAction::Ignore => {}
            MenuAction::Delete => {
                if let Err(e) = message.delete(&ctx.http).await {
                    nay!("Failed to delete menu message: {}", e);
                }
                self.menus.remove(message_id).await;
                return;
            }
            MenuAction::Respond(response) => {
                let child_reactions = child.as_ref().map(|(_, state)| state.reaction_list.clone());
                self.apply_response(
                    ctx,
                    &message,
                    previous_reactions,
                    child_reactions,
                    &mut ims,
                    response,
                )
                .await;
            }
        }

        // let the user react with the same emoji again
        if let Err(e) = reaction.delete(&ctx.http).await {
            hey!("Failed to remove a user reaction: {}", e);
        }
    }

    async fn apply_response(
        &self,
        ctx: &Context,
        message: &Message,
        previous_reactions: Vec<String>,
        child_reactions: Option<Vec<String>>,
        ims: &mut MenuState,
        response: MenuResponse,
    ) {
        match response.target {
            MenuTarget::Current => {
                let builder = EditMessage::new().embeds(response.control.embeds);
                match message.channel_id.edit_message(&ctx.http, message.id, builder).await {
                    Ok(edited) => {
                        let new_reactions = &response.control.reaction_list;
                        sync_reactions(ctx, &edited, &previous_reactions, new_reactions).await;
                    }
                    Err(e) => {
                        nay!("Failed to update menu message: {}", e);
                        return;
                    }
                }
                self.menus.insert(message.id.get(), &response.state).await;
            }
            MenuTarget::NewChild => {
                let builder = CreateMessage::new().embeds(response.control.embeds);
                let child = match message.channel_id.send_message(&ctx.http, builder).await {
                    Ok(child) => child,
                    Err(e) => {
                        nay!("Failed to send child menu: {}", e);
                        return;
                    }
                };
                let mut child_state = response.state;
                self.menus
                    .link_child(message.id.get(), ims, child.id.get(), &mut child_state)
                    .await;

                let mut reactions = response.control.reaction_list;
                reactions.push(MENU_EMOJI_CONFIG.delete_message.to_string());
                react_all(ctx, &child, &reactions).await;
            }
            MenuTarget::Child(child_id) => {
                let builder = EditMessage::new().embeds(response.control.embeds);
                let edited = message
                    .channel_id
                    .edit_message(&ctx.http, MessageId::new(child_id), builder)
                    .await;
                match edited {
                    Ok(edited) => {
                        let old = child_reactions.unwrap_or_default();
                        sync_reactions(ctx, &edited, &old, &response.control.reaction_list).await;
                    }
                    Err(e) => {
                        // the child was probably deleted, a new one is made on the next selection
                        hey!("Failed to update child menu {}: {}", child_id, e);
                        self.menus.unlink_child(message.id.get(), ims).await;
                        return;
                    }
                }
                let mut child_state = response.state;
                self.menus
                    .update_child(message.id.get(), ims, child_id, &mut child_state)
                    .await;
            }
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        // register commands
        register_command(&ctx, commands::id::register()).await;
        register_command(&ctx, commands::idsearch::register()).await;
        register_command(&ctx, commands::random_monster::register()).await;

        yay!("{} is connected!", ready.user.name);
        say!("Serving {} monsters", self.db.len());

        ctx.set_presence(
            Some(ActivityData::custom("Looking up monsters")),
            OnlineStatus::Online,
        );
    }

    async fn resume(&self, _: Context, _: ResumedEvent) {
        hey!("Resumed");
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        self.handle_reaction(&ctx, &reaction).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            let command_name = command.data.name.as_str();
            let command_options = &command.data.options();

            match command_name {
                "id" => {
                    commands::id::run(
                        command_options,
                        &ctx,
                        &command,
                        self.db.as_ref(),
                        &self.menus,
                        &self.config,
                    )
                    .await;
                }
                "idsearch" => {
                    commands::idsearch::run(
                        command_options,
                        &ctx,
                        &command,
                        self.db.as_ref(),
                        &self.menus,
                    )
                    .await;
                }
                "random_monster" => {
                    commands::random_monster::run(
                        &ctx,
                        &command,
                        self.db.as_ref(),
                        &self.menus,
                        &self.config,
                    )
                    .await;
                }
                _ => {
                    command_response(&ctx, &command, "Unknown command!").await;
                }
            }
        }
    }
}
