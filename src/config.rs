use std::{
    collections::HashMap,
    fs::{self, OpenOptions},
    io::Write,
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{hey, nay};

pub const CONFIG_PATH: &str = "./config.json";
pub const DEFAULT_DATA_PATH: &str = "./data/monsters.json";

fn default_data_path() -> String {
    DEFAULT_DATA_PATH.to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConfigSettings {
    #[serde(default = "default_data_path")]
    data_path: String,
    /// evo scroll mode for everyone, not just the listed users
    #[serde(default)]
    evoscroll_by_default: bool,
    #[serde(default)]
    evoscroll_user_ids: Vec<u64>,
    /// menu owner id -> users allowed to drive that owner's menus
    #[serde(default)]
    friends: HashMap<u64, Vec<u64>>,
}

impl Default for ConfigSettings {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            evoscroll_by_default: false,
            evoscroll_user_ids: Vec::new(),
            friends: HashMap::new(),
        }
    }
}

impl ConfigSettings {
    pub fn get() -> Self {
        Self::get_from(CONFIG_PATH)
    }

    /// Falls back to the defaults (writing them out if there is no file) when the file can't be used.
    pub fn get_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            Self::generate(path);
            return Self::default();
        }

        let Ok(data) = fs::read_to_string(path) else {
            hey!("Failed to read config file {}, using defaults", path.display());
            return Self::default();
        };

        match serde_json::from_str(data.as_str()) {
            Ok(cfg) => cfg,
            Err(e) => {
                nay!("Failed to deserialize config data: {}", e);
                Self::default()
            }
        }
    }

    fn generate(path: &Path) {
        if path.exists() {
            hey!("Config data already exists");
            return;
        };

        let Ok(mut file) = OpenOptions::new()
            .read(false)
            .write(true)
            .create(true)
            .append(false)
            .open(path)
        else {
            hey!("Failed to get file for config file.");
            return;
        };

        let Ok(data) = serde_json::to_string_pretty(&Self::default()) else {
            hey!("Failed to serialize config data.");
            return;
        };

        if let Err(e) = write!(file, "{}", data) {
            hey!("Failed to write to file for config: {}", e);
        }
    }

    pub fn get_data_path(&self) -> &str {
        &self.data_path
    }

    pub fn check_evo_id(&self, user_id: u64) -> bool {
        self.evoscroll_by_default || self.evoscroll_user_ids.contains(&user_id)
    }

    pub fn get_friend_ids(&self, user_id: u64) -> Vec<u64> {
        self.friends.get(&user_id).cloned().unwrap_or_default()
    }
}
