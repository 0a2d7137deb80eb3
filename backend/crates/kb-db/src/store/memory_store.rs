//! Shared in-memory state behind a single lock.
//!
//! Every repository in this crate is a view over one `MemoryStore`. A single
//! repository call holds the lock for its whole read-modify-write, so each
//! call is atomic. Sequences of calls are not.

use crate::store::demo_data;
use crate::{DbError, Result as DbErrorResult, Snapshot};

use std::path::Path;
use std::sync::Arc;

use log::info;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Snapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(mut snapshot: Snapshot) -> Self {
        snapshot.normalize();
        Self {
            inner: Arc::new(RwLock::new(snapshot)),
        }
    }

    pub fn with_demo_data() -> Self {
        Self::from_snapshot(demo_data::snapshot())
    }

    /// Load a JSON snapshot (`{boards, collections, activities, users}`).
    pub async fn load_seed_file(path: &Path) -> DbErrorResult<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DbError::seed_io(path, e))?;

        let snapshot: Snapshot =
            serde_json::from_str(&contents).map_err(|e| DbError::seed_parse(path, e))?;

        info!(
            "Loaded seed file {}: {} boards, {} collections, {} activities, {} users",
            path.display(),
            snapshot.boards.len(),
            snapshot.collections.len(),
            snapshot.activities.len(),
            snapshot.users.len()
        );

        Ok(Self::from_snapshot(snapshot))
    }

    /// Owned copy of the current contents
    pub async fn snapshot(&self) -> Snapshot {
        self.inner.read().await.clone()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.inner.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Snapshot> {
        self.inner.write().await
    }
}
