use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use rand::seq::IndexedRandom;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serenity::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read monster data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse monster data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonsterModel {
    pub monster_id: u32,
    pub name_en: String,
    #[serde(default)]
    pub rarity: u32,
    /// the first monster of the evolution tree, shared by every monster in the tree
    pub base_evo_id: u32,
    #[serde(default)]
    pub series_id: Option<u32>,
    #[serde(default)]
    pub series_name: Option<String>,
    #[serde(default)]
    pub evo_mats: Vec<u32>,
    /// set when this monster is the evo gem of another monster
    #[serde(default)]
    pub gem_for: Option<u32>,
    #[serde(default)]
    pub active_skill_id: Option<u32>,
    #[serde(default)]
    pub hp: u32,
    #[serde(default)]
    pub atk: u32,
    #[serde(default)]
    pub rcv: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl MonsterModel {
    pub fn is_base_evo(&self) -> bool {
        self.monster_id == self.base_evo_id
    }
}

/// The queries menus make against monster data, keyed by monster.
#[async_trait]
pub trait MonsterSource: Send + Sync {
    async fn get_monster(&self, monster_id: u32) -> Option<MonsterModel>;

    /// every monster in the same evolution tree, including the monster itself, sorted by id
    async fn get_alt_versions(&self, monster: &MonsterModel) -> Vec<MonsterModel>;

    /// evo gems belonging to any of the given monsters
    async fn get_gem_versions(&self, monster_ids: &[u32]) -> Vec<MonsterModel>;

    async fn get_series(&self, series_id: u32) -> Vec<MonsterModel>;

    /// monsters that use the given monster as an evolution material
    async fn get_used_in(&self, monster_id: u32) -> Vec<MonsterModel>;

    /// other monsters sharing the monster's active skill
    async fn get_skillups(&self, monster: &MonsterModel) -> Vec<MonsterModel>;

    async fn search(&self, query: &str, limit: usize) -> Vec<MonsterModel>;

    async fn random_monster(&self) -> Option<MonsterModel>;
}

/// All monsters, held in ram.
pub struct MonsterDatabase {
    monsters: Vec<MonsterModel>,
    by_id: HashMap<u32, usize>,
}

fn id_query_regex() -> &'static Regex {
    static ID_QUERY: OnceLock<Regex> = OnceLock::new();
    ID_QUERY.get_or_init(|| Regex::new(r"^\s*#?(\d+)\s*$").expect("id query regex is valid"))
}

impl MonsterDatabase {
    pub fn new(mut monsters: Vec<MonsterModel>) -> Self {
        monsters.sort_by_key(|m| m.monster_id);
        let by_id = monsters
            .iter()
            .enumerate()
            .map(|(i, m)| (m.monster_id, i))
            .collect();
        Self { monsters, by_id }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let data = fs::read_to_string(path)?;
        let monsters: Vec<MonsterModel> = serde_json::from_str(&data)?;
        Ok(Self::new(monsters))
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    fn by_id(&self, monster_id: u32) -> Option<&MonsterModel> {
        self.by_id.get(&monster_id).map(|&i| &self.monsters[i])
    }

    fn collect<F: Fn(&MonsterModel) -> bool>(&self, predicate: F) -> Vec<MonsterModel> {
        self.monsters
            .iter()
            .filter(|m| predicate(m))
            .cloned()
            .collect()
    }

    /// `#1234` or `1234` looks up by id, anything else matches names.
    /// Exact name matches come first, then names starting with the query, then the rest.
    pub fn find(&self, query: &str, limit: usize) -> Vec<MonsterModel> {
        if let Some(caps) = id_query_regex().captures(query) {
            if let Ok(id) = caps[1].parse::<u32>() {
                if let Some(monster) = self.by_id(id) {
                    return vec![monster.clone()];
                }
            }
        }

        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(u8, &MonsterModel)> = self
            .monsters
            .iter()
            .filter_map(|m| {
                let name = m.name_en.to_lowercase();
                if name == query {
                    Some((0, m))
                } else if name.starts_with(&query) {
                    Some((1, m))
                } else if name.contains(&query) {
                    Some((2, m))
                } else {
                    None
                }
            })
            .collect();
        // stable, so ties stay in id order
        matches.sort_by_key(|(rank, _)| *rank);

        matches
            .into_iter()
            .take(limit)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

#[async_trait]
impl MonsterSource for MonsterDatabase {
    async fn get_monster(&self, monster_id: u32) -> Option<MonsterModel> {
        self.by_id(monster_id).cloned()
    }

    async fn get_alt_versions(&self, monster: &MonsterModel) -> Vec<MonsterModel> {
        self.collect(|m| m.base_evo_id == monster.base_evo_id)
    }

    async fn get_gem_versions(&self, monster_ids: &[u32]) -> Vec<MonsterModel> {
        self.collect(|m| m.gem_for.is_some_and(|id| monster_ids.contains(&id)))
    }

    async fn get_series(&self, series_id: u32) -> Vec<MonsterModel> {
        self.collect(|m| m.series_id == Some(series_id))
    }

    async fn get_used_in(&self, monster_id: u32) -> Vec<MonsterModel> {
        self.collect(|m| m.evo_mats.contains(&monster_id))
    }

    async fn get_skillups(&self, monster: &MonsterModel) -> Vec<MonsterModel> {
        let Some(skill_id) = monster.active_skill_id else {
            return Vec::new();
        };
        self.collect(|m| m.active_skill_id == Some(skill_id) && m.monster_id != monster.monster_id)
    }

    async fn search(&self, query: &str, limit: usize) -> Vec<MonsterModel> {
        self.find(query, limit)
    }

    async fn random_monster(&self) -> Option<MonsterModel> {
        self.monsters.choose(&mut rand::rng()).cloned()
    }
}
