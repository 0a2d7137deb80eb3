pub(crate) mod board_detail;
pub(crate) mod boards_state;
pub(crate) mod collections_state;
pub(crate) mod notification_feed;

pub use board_detail::{BoardDetail, DragState, ReconcilePolicy};
pub use boards_state::BoardsState;
pub use collections_state::CollectionsState;
pub use notification_feed::NotificationFeed;
