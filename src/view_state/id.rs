use crate::monster_data::{MonsterModel, MonsterSource};
use crate::view_state::{IdPane, MenuState};

/// Series larger than this are not worth listing as a pantheon.
pub const PANTHEON_LIMIT: usize = 20;

fn non_empty(monsters: Vec<MonsterModel>) -> Option<Vec<MonsterModel>> {
    if monsters.is_empty() {
        None
    } else {
        Some(monsters)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EvosQuery {
    pub alt_versions: Option<Vec<MonsterModel>>,
    pub gem_versions: Option<Vec<MonsterModel>>,
}

impl EvosQuery {
    pub async fn do_query(db: &dyn MonsterSource, monster: &MonsterModel) -> Self {
        let tree = db.get_alt_versions(monster).await;
        let tree_ids: Vec<u32> = tree.iter().map(|m| m.monster_id).collect();
        let gem_versions = non_empty(db.get_gem_versions(&tree_ids).await);
        // a tree of one is just the monster itself
        let alt_versions = if tree.len() > 1 { Some(tree) } else { None };
        Self {
            alt_versions,
            gem_versions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.alt_versions.is_none() && self.gem_versions.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PantheonQuery {
    pub pantheon_list: Option<Vec<MonsterModel>>,
    pub series_name: Option<String>,
}

impl PantheonQuery {
    pub async fn do_query(db: &dyn MonsterSource, monster: &MonsterModel) -> Self {
        let Some(series_id) = monster.series_id else {
            return Self::default();
        };
        let series_name = monster.series_name.clone();
        let members: Vec<MonsterModel> = db
            .get_series(series_id)
            .await
            .into_iter()
            .filter(|m| m.is_base_evo())
            .collect();

        if members.len() <= 1 || members.len() > PANTHEON_LIMIT {
            return Self {
                pantheon_list: None,
                series_name,
            };
        }

        Self {
            pantheon_list: Some(members),
            series_name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MaterialsQuery {
    pub mats: Option<Vec<MonsterModel>>,
    pub used_in: Option<Vec<MonsterModel>>,
    pub gem_id: Option<u32>,
    pub skillups: Option<Vec<MonsterModel>>,
}

impl MaterialsQuery {
    pub async fn do_query(db: &dyn MonsterSource, monster: &MonsterModel) -> Self {
        let mut mats = Vec::new();
        for mat_id in &monster.evo_mats {
            if let Some(mat) = db.get_monster(*mat_id).await {
                mats.push(mat);
            }
        }
        let used_in = db.get_used_in(monster.monster_id).await;
        let gem_id = db
            .get_gem_versions(&[monster.monster_id])
            .await
            .first()
            .map(|gem| gem.monster_id);
        let skillups = db.get_skillups(monster).await;

        Self {
            mats: non_empty(mats),
            used_in: non_empty(used_in),
            gem_id,
            skillups: non_empty(skillups),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mats.is_none() && self.used_in.is_none() && self.gem_id.is_none() && self.skillups.is_none()
    }
}

/// Data for the pane variant an id menu is rendering.
#[derive(Debug, Clone)]
pub enum PaneData {
    Id,
    Evos(EvosQuery),
    Materials(MaterialsQuery),
    Pic,
    Pantheon(PantheonQuery),
    OtherInfo,
}

#[derive(Debug, Clone)]
pub struct IdViewState {
    pub monster: MonsterModel,
    pub query: String,
    pub is_child: bool,
    pub reaction_list: Vec<String>,
    pub pane: PaneData,
}

impl IdViewState {
    /// `None` when the state has no monster or the monster no longer exists.
    pub async fn deserialize(db: &dyn MonsterSource, ims: &MenuState) -> Option<Self> {
        let monster = db.get_monster(ims.resolved_monster_id?).await?;
        let pane = match ims.id_pane {
            IdPane::Id => PaneData::Id,
            IdPane::Evos => PaneData::Evos(EvosQuery::do_query(db, &monster).await),
            IdPane::Materials => PaneData::Materials(MaterialsQuery::do_query(db, &monster).await),
            IdPane::Pic => PaneData::Pic,
            IdPane::Pantheon => PaneData::Pantheon(PantheonQuery::do_query(db, &monster).await),
            IdPane::OtherInfo => PaneData::OtherInfo,
        };

        Some(Self {
            monster,
            query: ims.query.clone(),
            is_child: ims.is_child,
            reaction_list: ims.reaction_list.clone(),
            pane,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster_data::tests::{monster, sample_database};
    use crate::monster_data::MonsterDatabase;

    #[tokio::test]
    async fn evos_for_a_tree_with_a_gem() {
        let db = sample_database();
        let tyrra = db.get_monster(1).await.unwrap();
        let evos = EvosQuery::do_query(&db, &tyrra).await;
        assert_eq!(evos.alt_versions.map(|v| v.len()), Some(3));
        assert_eq!(evos.gem_versions.map(|v| v[0].monster_id), Some(4));
    }

    #[tokio::test]
    async fn lone_monster_has_nothing() {
        let db = sample_database();
        let loner = db.get_monster(200).await.unwrap();
        assert!(EvosQuery::do_query(&db, &loner).await.is_empty());
        assert!(PantheonQuery::do_query(&db, &loner).await.pantheon_list.is_none());
        assert!(MaterialsQuery::do_query(&db, &loner).await.is_empty());
    }

    #[tokio::test]
    async fn pantheon_lists_base_evos_of_the_series() {
        let db = sample_database();
        let tyrannos = db.get_monster(2).await.unwrap();
        let pantheon = PantheonQuery::do_query(&db, &tyrannos).await;
        let ids: Vec<u32> = pantheon
            .pantheon_list
            .unwrap()
            .iter()
            .map(|m| m.monster_id)
            .collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[tokio::test]
    async fn oversized_pantheon_is_dropped() {
        let monsters = (1..=(PANTHEON_LIMIT as u32 + 1))
            .map(|id| {
                let mut m = monster(id, "Filler", id);
                m.series_id = Some(1);
                m
            })
            .collect();
        let db = MonsterDatabase::new(monsters);
        let first = db.get_monster(1).await.unwrap();
        assert!(PantheonQuery::do_query(&db, &first).await.pantheon_list.is_none());
    }

    #[tokio::test]
    async fn materials_of_the_final_evo() {
        let db = sample_database();
        let great = db.get_monster(3).await.unwrap();
        let mats = MaterialsQuery::do_query(&db, &great).await;
        assert_eq!(mats.mats.map(|v| v.len()), Some(2));
        assert_eq!(mats.gem_id, Some(4));
        assert!(mats.used_in.is_none());
        assert!(mats.skillups.is_none());
    }

    #[tokio::test]
    async fn missing_monster_yields_no_view() {
        let db = sample_database();
        let ims = MenuState::new_id_menu(1, "nothing", 9999, Vec::new());
        assert!(IdViewState::deserialize(&db, &ims).await.is_none());

        let mut ims = MenuState::new_id_menu(1, "tyrra", 1, Vec::new());
        ims.id_pane = IdPane::Pantheon;
        let view = IdViewState::deserialize(&db, &ims).await.unwrap();
        assert!(matches!(view.pane, PaneData::Pantheon(_)));
    }
}
