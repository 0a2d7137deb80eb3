pub mod demo_data;
pub mod memory_store;
pub mod snapshot;
