pub(crate) mod api;
pub(crate) mod client;
pub(crate) mod error;

pub use api::KanbanApi;
pub use client::{Client, USER_ID_HEADER, activity_query};
pub use error::{ClientError, Result as CliClientResult};
