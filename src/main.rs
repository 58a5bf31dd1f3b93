use serenity::all::GatewayIntents;
use serenity::Client;
use std::env;
use std::sync::Arc;

use crate::config::ConfigSettings;
use crate::discord_handler::Handler;
use crate::menu_store::MenuStore;
use crate::monster_data::MonsterDatabase;

pub mod config;
pub mod helpers;
pub mod logging;
pub mod menu;
pub mod menu_store;
pub mod monster_data;
pub mod view_state;
pub mod views;

mod commands;
mod discord_handler;

#[tokio::main]
async fn main() {
    yay!("Padinfo Bot is starting up!");

    if let Err(e) = dotenv::dotenv() {
        hey!("No .env file loaded: {}", e);
    }

    let Ok(token) = env::var("DISCORD_TOKEN") else {
        nay!("DISCORD_TOKEN not found in environment");
        return;
    };

    let config = ConfigSettings::get();

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGE_REACTIONS;

    say!("Loading monster data into ram...");
    let db = match MonsterDatabase::load(config.get_data_path()) {
        Ok(db) => db,
        Err(e) => {
            nay!("Failed to load monster data from {}: {}", config.get_data_path(), e);
            return;
        }
    };
    say!("{} monsters loaded!", db.len());

    let Ok(mut client) = Client::builder(token, intents)
        .event_handler(Handler {
            db: Arc::new(db),
            menus: Arc::new(MenuStore::default()),
            config: Arc::new(config),
        })
        .await
    else {
        nay!("Error creating client");
        return;
    };

    if let Err(err) = client.start().await {
        nay!("Client error: {}", err);
    }
}
