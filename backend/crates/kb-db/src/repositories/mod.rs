pub mod activity_repository;
pub mod board_repository;
pub mod card_repository;
pub mod collection_repository;
pub mod column_repository;
pub mod user_repository;

use crate::{
    ActivityRepository, BoardRepository, CardRepository, CollectionRepository, ColumnRepository,
    MemoryActivityRepository, MemoryBoardRepository, MemoryCardRepository,
    MemoryCollectionRepository, MemoryColumnRepository, MemoryStore, MemoryUserRepository,
    UserRepository,
};

use std::sync::Arc;

/// One repository per entity kind, built once at startup and shared by the
/// service layer.
#[derive(Clone)]
pub struct Repositories {
    pub boards: Arc<dyn BoardRepository>,
    pub columns: Arc<dyn ColumnRepository>,
    pub cards: Arc<dyn CardRepository>,
    pub collections: Arc<dyn CollectionRepository>,
    pub activities: Arc<dyn ActivityRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    pub fn in_memory(store: &MemoryStore) -> Self {
        Self {
            boards: Arc::new(MemoryBoardRepository::new(store.clone())),
            columns: Arc::new(MemoryColumnRepository::new(store.clone())),
            cards: Arc::new(MemoryCardRepository::new(store.clone())),
            collections: Arc::new(MemoryCollectionRepository::new(store.clone())),
            activities: Arc::new(MemoryActivityRepository::new(store.clone())),
            users: Arc::new(MemoryUserRepository::new(store.clone())),
        }
    }
}
