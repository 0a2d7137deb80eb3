//! Activity log storage.
//!
//! The log is kept ordered newest first. `create` stamps the id and
//! timestamp and inserts at the position that preserves that order, so
//! readers never sort.

use crate::{MemoryStore, Result as DbErrorResult};

use kb_core::{Activity, ActivityPatch, NewActivity};

use async_trait::async_trait;

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// All activities, newest first
    async fn find_all(&self) -> DbErrorResult<Vec<Activity>>;

    async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<Activity>>;

    async fn find_by_board(&self, board_id: &str) -> DbErrorResult<Vec<Activity>>;

    async fn create(&self, activity: NewActivity) -> DbErrorResult<Activity>;

    async fn update(&self, id: &str, patch: ActivityPatch) -> DbErrorResult<Option<Activity>>;

    async fn delete(&self, id: &str) -> DbErrorResult<Option<Activity>>;

    /// Flip `liked` under one write lock
    async fn toggle_like(&self, id: &str) -> DbErrorResult<Option<Activity>>;

    /// Mark every activity read. Returns how many were unread.
    async fn mark_all_read(&self) -> DbErrorResult<usize>;
}

pub struct MemoryActivityRepository {
    store: MemoryStore,
}

impl MemoryActivityRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ActivityRepository for MemoryActivityRepository {
    async fn find_all(&self) -> DbErrorResult<Vec<Activity>> {
        Ok(self.store.read().await.activities.clone())
    }

    async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<Activity>> {
        let data = self.store.read().await;
        Ok(data.activities.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_board(&self, board_id: &str) -> DbErrorResult<Vec<Activity>> {
        let data = self.store.read().await;
        Ok(data
            .activities
            .iter()
            .filter(|a| a.board_id.as_deref() == Some(board_id))
            .cloned()
            .collect())
    }

    async fn create(&self, activity: NewActivity) -> DbErrorResult<Activity> {
        let activity = activity.into_activity();
        let mut data = self.store.write().await;
        let at = data
            .activities
            .partition_point(|existing| existing.timestamp > activity.timestamp);
        data.activities.insert(at, activity.clone());
        Ok(activity)
    }

    async fn update(&self, id: &str, patch: ActivityPatch) -> DbErrorResult<Option<Activity>> {
        let mut data = self.store.write().await;
        let Some(activity) = data.activities.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        patch.apply_to(activity);
        Ok(Some(activity.clone()))
    }

    async fn delete(&self, id: &str) -> DbErrorResult<Option<Activity>> {
        let mut data = self.store.write().await;
        let Some(index) = data.activities.iter().position(|a| a.id == id) else {
            return Ok(None);
        };
        Ok(Some(data.activities.remove(index)))
    }

    async fn toggle_like(&self, id: &str) -> DbErrorResult<Option<Activity>> {
        let mut data = self.store.write().await;
        let Some(activity) = data.activities.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        activity.liked = !activity.liked;
        Ok(Some(activity.clone()))
    }

    async fn mark_all_read(&self) -> DbErrorResult<usize> {
        let mut data = self.store.write().await;
        let mut changed = 0;
        for activity in data.activities.iter_mut().filter(|a| !a.read) {
            activity.read = true;
            changed += 1;
        }
        Ok(changed)
    }
}
