pub mod activity_service;
pub mod board_service;
pub mod card_service;
pub mod collection_service;
pub mod column_service;
mod lookup;
pub mod member_service;
pub mod user_service;

use crate::{
    ActivityService, BoardService, CardService, CollectionService, ColumnService, MemberService,
    UserService,
};

use kb_config::ValidationConfig;
use kb_db::Repositories;

/// All services over one set of repositories
#[derive(Clone)]
pub struct Services {
    pub boards: BoardService,
    pub columns: ColumnService,
    pub cards: CardService,
    pub collections: CollectionService,
    pub activities: ActivityService,
    pub members: MemberService,
    pub users: UserService,
}

impl Services {
    pub fn new(repos: Repositories, limits: ValidationConfig) -> Self {
        Self {
            boards: BoardService::new(repos.clone(), limits.clone()),
            columns: ColumnService::new(repos.clone(), limits.clone()),
            cards: CardService::new(repos.clone(), limits.clone()),
            collections: CollectionService::new(repos.clone(), limits.clone()),
            activities: ActivityService::new(repos.clone(), limits.clone()),
            members: MemberService::new(repos.clone(), limits.clone()),
            users: UserService::new(repos, limits),
        }
    }
}
