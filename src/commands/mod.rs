use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    ResolvedOption, ResolvedValue,
};

use crate::config::ConfigSettings;
use crate::helpers::{command_response, react_all};
use crate::menu::id::IdMenu;
use crate::menu::reaction_list::get_id_menu_initial_reaction_list;
use crate::menu::{EmbedControl, MenuData, MENU_EMOJI_CONFIG};
use crate::menu_store::MenuStore;
use crate::monster_data::{MonsterModel, MonsterSource};
use crate::nay;
use crate::view_state::MenuState;

pub(crate) mod id;
pub(crate) mod idsearch;
pub(crate) mod random_monster;

/// The string value of the named option, if it was given.
pub fn string_option<'a>(options: &'a [ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options.iter().find_map(|option| match option {
        ResolvedOption {
            name: option_name,
            value: ResolvedValue::String(value),
            ..
        } if *option_name == name => Some(*value),
        _ => None,
    })
}

pub fn bool_option(options: &[ResolvedOption<'_>], name: &str) -> Option<bool> {
    options.iter().find_map(|option| match option {
        ResolvedOption {
            name: option_name,
            value: ResolvedValue::Boolean(value),
            ..
        } if *option_name == name => Some(*value),
        _ => None,
    })
}

/// Responds to the command with a menu and starts tracking it.
pub async fn send_menu(
    ctx: &Context,
    cmd: &CommandInteraction,
    control: EmbedControl,
    state: MenuState,
    store: &MenuStore,
) {
    let data = CreateInteractionResponseMessage::new().embeds(control.embeds);
    if let Err(e) = cmd
        .create_response(&ctx.http, CreateInteractionResponse::Message(data))
        .await
    {
        nay!("Failed to send menu: {}", e);
        return;
    }

    let msg = match cmd.get_response(&ctx.http).await {
        Ok(msg) => msg,
        Err(e) => {
            nay!("Failed to get the sent menu message: {}", e);
            return;
        }
    };
    store.insert(msg.id.get(), &state).await;

    let mut reactions = control.reaction_list;
    reactions.push(MENU_EMOJI_CONFIG.delete_message.to_string());
    react_all(ctx, &msg, &reactions).await;
}

#[allow(clippy::too_many_arguments)]
pub async fn send_id_menu(
    ctx: &Context,
    cmd: &CommandInteraction,
    monster: &MonsterModel,
    query: &str,
    force_evoscroll: bool,
    db: &dyn MonsterSource,
    store: &MenuStore,
    config: &ConfigSettings,
) {
    let author_id = cmd.user.id.get();
    let evoscroll = force_evoscroll || config.check_evo_id(author_id);
    let reaction_list = get_id_menu_initial_reaction_list(db, monster, None, evoscroll).await;

    let mut ims = MenuState::new_id_menu(author_id, query, monster.monster_id, reaction_list);
    let data = MenuData { db, child: None };
    let Some(response) = IdMenu::respond_with_current_id(&mut ims, &data).await else {
        command_response(ctx, cmd, format!("Monster #{} could not be shown.", monster.monster_id)).await;
        return;
    };

    send_menu(ctx, cmd, response.control, response.state, store).await;
}
