pub mod error;
pub mod ids;
pub mod inputs;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use inputs::activity_input::{ActivityPatch, NewActivity};
pub use inputs::board_input::{BoardPatch, NewBoard};
pub use inputs::card_input::{CardPatch, NewCard};
pub use inputs::collection_input::{CollectionPatch, NewCollection};
pub use inputs::column_input::{ColumnPatch, NewColumn};
pub use inputs::user_input::{NewUser, UserPatch};
pub use models::activity::Activity;
pub use models::activity_filter::ActivityFilter;
pub use models::activity_type::ActivityType;
pub use models::attachment::Attachment;
pub use models::board::Board;
pub use models::board_member::BoardMember;
pub use models::card::Card;
pub use models::collection::Collection;
pub use models::column::Column;
pub use models::comment::Comment;
pub use models::counted_list::CountedList;
pub use models::label::Label;
pub use models::user::{User, initials_for};
pub use models::user_role::UserRole;
pub use models::user_summary::UserSummary;
