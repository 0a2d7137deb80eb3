//! Mutation services for boards, columns, cards, collections, members,
//! users and the activity feed.
//!
//! Services enforce referential integrity and input limits on top of the
//! repositories, and record one activity for every board, column and card
//! mutation. Failures are returned as [`ServiceError`] values.

pub mod activity_log;
pub mod error;
pub mod services;
pub mod validation;


pub use error::{Result, ServiceError};
pub use services::Services;
pub use services::activity_service::ActivityService;
pub use services::board_service::BoardService;
pub use services::card_service::CardService;
pub use services::collection_service::CollectionService;
pub use services::column_service::ColumnService;
pub use services::member_service::{MemberService, NewMember};
pub use services::user_service::UserService;
pub use validation::{sanitize_string, validate_email, validate_string};
