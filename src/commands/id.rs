use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    ResolvedOption,
};

use crate::commands::{bool_option, send_id_menu, string_option};
use crate::config::ConfigSettings;
use crate::helpers::command_response;
use crate::menu_store::MenuStore;
use crate::monster_data::MonsterSource;

pub async fn run(
    options: &[ResolvedOption<'_>],
    ctx: &Context,
    cmd: &CommandInteraction,
    db: &dyn MonsterSource,
    store: &MenuStore,
    config: &ConfigSettings,
) {
    let Some(query) = string_option(options, "query") else {
        command_response(ctx, cmd, "You must specify a monster!").await;
        return;
    };
    let force_evoscroll = bool_option(options, "evoscroll").unwrap_or(false);

    let Some(monster) = db.search(query, 1).await.into_iter().next() else {
        command_response(ctx, cmd, format!("No monster found matching `{}`", query)).await;
        return;
    };

    send_id_menu(ctx, cmd, &monster, query, force_evoscroll, db, store, config).await;
}

pub fn register() -> CreateCommand {
    CreateCommand::new("id")
        .description("Look up a monster by name or #id")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "query", "Monster name or #id")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Boolean,
                "evoscroll",
                "Only show the panes this monster has data for",
            )
            .required(false),
        )
        .dm_permission(true)
}
