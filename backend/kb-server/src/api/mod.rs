pub mod activities;
pub mod boards;
pub mod cards;
pub mod collections;
pub mod columns;
pub mod data_response;
pub mod error;
pub mod extractors;
pub mod members;
pub mod users;
