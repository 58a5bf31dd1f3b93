use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    ResolvedOption,
};

use crate::commands::{send_menu, string_option};
use crate::helpers::command_response;
use crate::menu::monster_list::{MonsterListMenu, MonsterListMenuPanes, MAX_LIST_SIZE};
use crate::menu::MenuData;
use crate::menu_store::MenuStore;
use crate::monster_data::MonsterSource;
use crate::view_state::MenuState;

pub async fn run(
    options: &[ResolvedOption<'_>],
    ctx: &Context,
    cmd: &CommandInteraction,
    db: &dyn MonsterSource,
    store: &MenuStore,
) {
    let Some(query) = string_option(options, "query") else {
        command_response(ctx, cmd, "You must specify a search!").await;
        return;
    };

    let monsters = db.search(query, MAX_LIST_SIZE).await;
    if monsters.is_empty() {
        command_response(ctx, cmd, format!("No monsters found matching `{}`", query)).await;
        return;
    }

    let monster_list: Vec<u32> = monsters.iter().map(|m| m.monster_id).collect();
    let reaction_list = MonsterListMenuPanes::get_initial_reaction_list(monster_list.len());
    let mut ims = MenuState::new_monster_list(cmd.user.id.get(), query, monster_list, reaction_list);

    let data = MenuData { db, child: None };
    let Some(response) = MonsterListMenu::respond_with_monster_list(&mut ims, &data).await else {
        command_response(ctx, cmd, "Failed to build the monster list.").await;
        return;
    };

    send_menu(ctx, cmd, response.control, response.state, store).await;
}

pub fn register() -> CreateCommand {
    CreateCommand::new("idsearch")
        .description("List monsters matching a search, react with a number to see one")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "query", "Part of a monster name")
                .required(true),
        )
        .dm_permission(true)
}
