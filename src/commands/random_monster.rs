use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::commands::send_id_menu;
use crate::config::ConfigSettings;
use crate::helpers::command_response;
use crate::menu_store::MenuStore;
use crate::monster_data::MonsterSource;

pub async fn run(
    ctx: &Context,
    cmd: &CommandInteraction,
    db: &dyn MonsterSource,
    store: &MenuStore,
    config: &ConfigSettings,
) {
    // get a random monster
    let Some(monster) = db.random_monster().await else {
        command_response(ctx, cmd, "There are no monsters loaded!").await;
        return;
    };
    // send the menu
    send_id_menu(ctx, cmd, &monster, "random", false, db, store, config).await;
}

pub fn register() -> CreateCommand {
    CreateCommand::new("random_monster")
        .description("Show a random monster")
        .dm_permission(true)
}
