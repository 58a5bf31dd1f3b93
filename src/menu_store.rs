use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::view_state::MenuState;
use crate::{hey, nay};

/// How many menus stay interactive. Older ones stop responding to reactions.
pub const MAX_TRACKED_MENUS: usize = 1000;

#[derive(Default)]
struct Blobs {
    by_message: HashMap<u64, String>,
    /// one per tracked message, dropped together with its blob
    locks: HashMap<u64, Arc<Mutex<()>>>,
    /// insertion order, oldest first
    order: VecDeque<u64>,
}

impl Blobs {
    fn forget(&mut self, message_id: u64) {
        self.by_message.remove(&message_id);
        self.locks.remove(&message_id);
    }
}

/// Serialized menu state for every live menu message, keyed by message id.
/// Menus are forgotten on restart.
pub struct MenuStore {
    blobs: RwLock<Blobs>,
    capacity: usize,
}

impl MenuStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            blobs: RwLock::new(Blobs::default()),
            capacity,
        }
    }

    pub async fn insert(&self, message_id: u64, state: &MenuState) {
        let blob = match state.serialize() {
            Ok(blob) => blob,
            Err(e) => {
                nay!("Failed to serialize menu state for message {}: {}", message_id, e);
                return;
            }
        };

        let mut blobs = self.blobs.write().await;
        if blobs.by_message.insert(message_id, blob).is_none() {
            blobs.locks.entry(message_id).or_default();
            blobs.order.push_back(message_id);
        }
        while blobs.order.len() > self.capacity {
            if let Some(oldest) = blobs.order.pop_front() {
                blobs.forget(oldest);
            }
        }
    }

    pub async fn get(&self, message_id: u64) -> Option<MenuState> {
        let blobs = self.blobs.read().await;
        let blob = blobs.by_message.get(&message_id)?;
        match MenuState::deserialize(blob) {
            Ok(state) => Some(state),
            Err(e) => {
                hey!("Dropping unusable menu state for message {}: {}", message_id, e);
                None
            }
        }
    }

    pub async fn remove(&self, message_id: u64) {
        let mut blobs = self.blobs.write().await;
        if blobs.by_message.contains_key(&message_id) {
            blobs.forget(message_id);
            blobs.order.retain(|id| *id != message_id);
        }
    }

    /// Waits for exclusive use of one tracked message. `None` if the message isn't tracked.
    pub async fn lock(&self, message_id: u64) -> Option<OwnedMutexGuard<()>> {
        let lock = self.blobs.read().await.locks.get(&message_id).cloned()?;
        Some(lock.lock_owned().await)
    }

    /// Waits for exclusive use of the menu a message belongs to. A list and its
    /// child id menu share the list's lock. Hold the guard from reading the state
    /// until the last write.
    pub async fn lock_menu(&self, message_id: u64) -> Option<OwnedMutexGuard<()>> {
        let root = self.get(message_id).await?.root_message_id(message_id);
        match self.lock(root).await {
            Some(guard) => Some(guard),
            // the parent was evicted, the child still works on its own
            None => self.lock(message_id).await,
        }
    }

    /// Stores a freshly sent child menu and links it with its parent.
    pub async fn link_child(
        &self,
        parent_id: u64,
        parent: &mut MenuState,
        child_id: u64,
        child: &mut MenuState,
    ) {
        child.parent_message_id = Some(parent_id);
        parent.child_message_id = Some(child_id);
        self.insert(child_id, child).await;
        self.insert(parent_id, parent).await;
    }

    /// Stores the new state of an existing child and of its parent.
    pub async fn update_child(
        &self,
        parent_id: u64,
        parent: &MenuState,
        child_id: u64,
        child: &mut MenuState,
    ) {
        child.parent_message_id = Some(parent_id);
        self.insert(child_id, child).await;
        self.insert(parent_id, parent).await;
    }

    /// Forgets a child that can no longer be edited, so the next selection sends a new one.
    pub async fn unlink_child(&self, parent_id: u64, parent: &mut MenuState) {
        if let Some(child_id) = parent.child_message_id.take() {
            self.remove(child_id).await;
        }
        self.insert(parent_id, parent).await;
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new(MAX_TRACKED_MENUS)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::menu::monster_list::{MonsterListMenu, MonsterListMenuPanes};
    use crate::menu::{MenuData, MenuTarget};
    use crate::monster_data::tests::sample_database;
    use crate::monster_data::MonsterDatabase;

    const PARENT: u64 = 100;
    const FIRST_CHILD: u64 = 500;

    fn state(monster_id: u32) -> MenuState {
        MenuState::new_id_menu(1, "q", monster_id, Vec::new())
    }

    fn list() -> MenuState {
        MenuState::new_monster_list(
            7,
            "tyr",
            vec![1, 2, 3],
            MonsterListMenuPanes::get_initial_reaction_list(3),
        )
    }

    #[tokio::test]
    async fn stores_and_replaces() {
        let store = MenuStore::default();
        store.insert(10, &state(1)).await;
        assert_eq!(store.get(10).await, Some(state(1)));

        store.insert(10, &state(2)).await;
        assert_eq!(store.get(10).await.unwrap().resolved_monster_id, Some(2));

        store.remove(10).await;
        assert!(store.get(10).await.is_none());
        assert!(store.lock(10).await.is_none());
    }

    #[tokio::test]
    async fn evicts_the_oldest() {
        let store = MenuStore::new(2);
        store.insert(1, &state(1)).await;
        store.insert(2, &state(2)).await;
        // replacing doesn't refresh the position
        store.insert(1, &state(3)).await;
        store.insert(3, &state(4)).await;

        assert!(store.get(1).await.is_none());
        assert!(store.lock(1).await.is_none());
        assert!(store.get(2).await.is_some());
        assert!(store.get(3).await.is_some());
    }

    #[tokio::test]
    async fn untracked_messages_have_no_lock() {
        let store = MenuStore::default();
        assert!(store.lock(10).await.is_none());
        assert!(store.lock_menu(10).await.is_none());
    }

    #[tokio::test]
    async fn child_shares_the_parent_lock() {
        let store = MenuStore::default();
        let mut parent = list();
        let mut child = state(1);
        store.insert(PARENT, &parent).await;
        store.link_child(PARENT, &mut parent, FIRST_CHILD, &mut child).await;

        let guard = store.lock_menu(PARENT).await.unwrap();
        let waiting = tokio::time::timeout(Duration::from_millis(20), store.lock_menu(FIRST_CHILD));
        assert!(waiting.await.is_err());

        drop(guard);
        assert!(store.lock_menu(FIRST_CHILD).await.is_some());
    }

    #[tokio::test]
    async fn orphaned_child_locks_itself() {
        let store = MenuStore::default();
        let mut parent = list();
        let mut child = state(1);
        store.link_child(PARENT, &mut parent, FIRST_CHILD, &mut child).await;
        store.remove(PARENT).await;

        assert!(store.lock_menu(FIRST_CHILD).await.is_some());
    }

    #[tokio::test]
    async fn linking_records_both_directions() {
        let store = MenuStore::default();
        let mut parent = list();
        let mut child = state(1);
        store.link_child(PARENT, &mut parent, FIRST_CHILD, &mut child).await;

        assert_eq!(store.get(PARENT).await.unwrap().child_message_id, Some(FIRST_CHILD));
        assert_eq!(store.get(FIRST_CHILD).await.unwrap().parent_message_id, Some(PARENT));
    }

    #[tokio::test]
    async fn unlinking_forgets_the_child() {
        let store = MenuStore::default();
        let mut parent = list();
        let mut child = state(1);
        store.link_child(PARENT, &mut parent, FIRST_CHILD, &mut child).await;

        store.unlink_child(PARENT, &mut parent).await;
        assert_eq!(parent.child_message_id, None);
        assert_eq!(store.get(PARENT).await.unwrap().child_message_id, None);
        assert!(store.get(FIRST_CHILD).await.is_none());
    }

    /// One numbered reaction, handled the way the bot does it.
    async fn select(db: &MonsterDatabase, store: &MenuStore, sent: &AtomicU64, n: usize) {
        let Some(_guard) = store.lock_menu(PARENT).await else {
            return;
        };
        let mut ims = store.get(PARENT).await.unwrap();
        let child = match ims.child_message_id {
            Some(child_id) => store.get(child_id).await.map(|state| (child_id, state)),
            None => None,
        };
        let data = MenuData {
            db,
            child: child.as_ref().map(|(id, state)| (*id, state)),
        };
        let mut response = MonsterListMenu::respond_with_n(&mut ims, n, &data)
            .await
            .unwrap();

        // the message round trip
        tokio::time::sleep(Duration::from_millis(20)).await;

        match response.target {
            MenuTarget::NewChild => {
                let child_id = FIRST_CHILD + sent.fetch_add(1, Ordering::SeqCst);
                store
                    .link_child(PARENT, &mut ims, child_id, &mut response.state)
                    .await;
            }
            MenuTarget::Child(child_id) => {
                store
                    .update_child(PARENT, &ims, child_id, &mut response.state)
                    .await;
            }
            MenuTarget::Current => panic!("a selection renders into the child"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_selections_share_one_child() {
        let db = Arc::new(sample_database());
        let store = Arc::new(MenuStore::default());
        let sent = Arc::new(AtomicU64::new(0));
        store.insert(PARENT, &list()).await;

        let tasks: Vec<_> = (0..2)
            .map(|n| {
                let (db, store, sent) = (db.clone(), store.clone(), sent.clone());
                tokio::spawn(async move { select(&db, &store, &sent, n).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(sent.load(Ordering::SeqCst), 1);
        let parent = store.get(PARENT).await.unwrap();
        assert_eq!(parent.child_message_id, Some(FIRST_CHILD));
        let child = store.get(FIRST_CHILD).await.unwrap();
        assert_eq!(child.parent_message_id, Some(PARENT));
        assert!(parent.resolved_monster_id.is_some());
        assert_eq!(child.resolved_monster_id, parent.resolved_monster_id);
    }
}
