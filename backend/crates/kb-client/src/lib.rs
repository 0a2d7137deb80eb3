//! kb-client library
//!
//! HTTP client for kb-server, drag-and-drop reordering and the client-side
//! state containers built on top of them.

pub(crate) mod client;
pub mod drag;
pub mod state;

#[cfg(test)]
mod tests;

pub use client::{
    CliClientResult, Client, ClientError, KanbanApi, USER_ID_HEADER, activity_query,
};
pub use drag::{DragLocation, DragResult, reorder};
pub use state::{
    BoardDetail, BoardsState, CollectionsState, DragState, NotificationFeed, ReconcilePolicy,
};
