//! Application State Management
//!
//! The central AppState holds the operation handlers (and through them the
//! shared store), metrics and configuration. It is cheap to clone and is
//! handed to every HTTP handler as axum state.

use std::sync::Arc;
use std::time::Instant;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::ops::Handlers;
use crate::storage::{self, SharedStore};
use crate::system::Metrics;

/// Central application state holding all services and components
#[derive(Clone)]
pub struct AppState {
    /// Query and mutation handlers over the shared store
    pub handlers: Handlers,

    /// Operation metrics, `None` when Prometheus export is disabled
    pub metrics: Option<Metrics>,

    /// Application configuration
    pub config: Arc<Config>,

    /// When the state was created
    pub started: Instant,
}

impl AppState {
    /// Create an AppState over an existing store
    pub fn new(store: SharedStore, config: Config) -> Result<Self> {
        let metrics = if config.metrics.enable_prometheus {
            let metrics = Metrics::new()?;
            metrics.record_store_stats(store.read().stats());
            Some(metrics)
        } else {
            None
        };

        Ok(Self {
            handlers: Handlers::new(store),
            metrics,
            config: Arc::new(config),
            started: Instant::now(),
        })
    }

    /// Create an AppState and its store from configuration
    pub fn from_config(config: Config) -> Result<Self> {
        tracing::info!(
            seed_demo_data = config.storage.seed_demo_data,
            "Creating AppState with in-memory storage"
        );
        let store = storage::create_shared_storage(&config.storage);
        Self::new(store, config)
    }
}
