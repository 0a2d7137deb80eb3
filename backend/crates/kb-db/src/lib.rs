pub mod error;
pub mod repositories;
pub mod store;

pub use error::{DbError, Result};
pub use repositories::Repositories;
pub use repositories::activity_repository::{ActivityRepository, MemoryActivityRepository};
pub use repositories::board_repository::{BoardRepository, MemoryBoardRepository};
pub use repositories::card_repository::{CardRepository, MemoryCardRepository};
pub use repositories::collection_repository::{CollectionRepository, MemoryCollectionRepository};
pub use repositories::column_repository::{ColumnRepository, MemoryColumnRepository};
pub use repositories::user_repository::{MemoryUserRepository, UserRepository};
pub use store::memory_store::MemoryStore;
pub use store::snapshot::Snapshot;
