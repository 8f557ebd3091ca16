//! Storage factory for creating the store from configuration

use crate::core::config::StorageConfig;
use crate::storage::{MemStore, SharedStore};

/// Create a store based on configuration
pub fn create_storage(config: &StorageConfig) -> MemStore {
    let mut store = MemStore::new();
    if config.seed_demo_data {
        store.seed_demo_data();
        tracing::info!("Storage seeded with demo data");
    }
    store
}

/// Create a shared store based on configuration
pub fn create_shared_storage(config: &StorageConfig) -> SharedStore {
    create_storage(config).into_shared()
}
