//! Entity store
//!
//! Normalized records held in three append-only collections. Records refer to
//! each other only by id; joins happen at read time in [`crate::graph`].

pub mod collection;
pub mod mem_store;
pub mod factory;

// Re-export main storage types
pub use collection::Collection;
pub use mem_store::{MemStore, SharedStore, StoreStats};
pub use factory::{create_shared_storage, create_storage};
