use crate::{MemoryStore, Result as DbErrorResult};

use kb_core::{Collection, CollectionPatch, NewCollection};

use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
pub trait CollectionRepository: Send + Sync {
    async fn find_all(&self) -> DbErrorResult<Vec<Collection>>;

    async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<Collection>>;

    async fn create(&self, collection: NewCollection) -> DbErrorResult<Collection>;

    async fn update(&self, id: &str, patch: CollectionPatch)
    -> DbErrorResult<Option<Collection>>;

    async fn delete(&self, id: &str) -> DbErrorResult<Option<Collection>>;

    /// Add `delta` to `board_count`, saturating at zero.
    async fn adjust_board_count(&self, id: &str, delta: i64)
    -> DbErrorResult<Option<Collection>>;
}

pub struct MemoryCollectionRepository {
    store: MemoryStore,
}

impl MemoryCollectionRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CollectionRepository for MemoryCollectionRepository {
    async fn find_all(&self) -> DbErrorResult<Vec<Collection>> {
        Ok(self.store.read().await.collections.clone())
    }

    async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<Collection>> {
        let data = self.store.read().await;
        Ok(data.collections.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, collection: NewCollection) -> DbErrorResult<Collection> {
        let collection = collection.into_collection();
        self.store
            .write()
            .await
            .collections
            .push(collection.clone());
        Ok(collection)
    }

    async fn update(
        &self,
        id: &str,
        patch: CollectionPatch,
    ) -> DbErrorResult<Option<Collection>> {
        let mut data = self.store.write().await;
        let Some(collection) = data.collections.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        patch.apply_to(collection);
        Ok(Some(collection.clone()))
    }

    async fn delete(&self, id: &str) -> DbErrorResult<Option<Collection>> {
        let mut data = self.store.write().await;
        let Some(index) = data.collections.iter().position(|c| c.id == id) else {
            return Ok(None);
        };
        Ok(Some(data.collections.remove(index)))
    }

    async fn adjust_board_count(
        &self,
        id: &str,
        delta: i64,
    ) -> DbErrorResult<Option<Collection>> {
        let mut data = self.store.write().await;
        let Some(collection) = data.collections.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        let count = (i64::from(collection.board_count) + delta).clamp(0, i64::from(u32::MAX));
        collection.board_count = count as u32;
        collection.updated_at = Utc::now();
        Ok(Some(collection.clone()))
    }
}
