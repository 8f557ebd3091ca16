//! Operation handlers
//!
//! Query and mutation entry points. Each handler takes the store lock once,
//! performs its lookup or write, and resolves the returned view under the same
//! lock so the caller always sees a consistent snapshot.

mod queries;
mod mutations;

use crate::storage::SharedStore;

/// Query and mutation handlers over an injected store
#[derive(Debug, Clone)]
pub struct Handlers {
    store: SharedStore,
}

impl Handlers {
    /// Create handlers over `store`
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// The underlying shared store
    pub fn store(&self) -> &SharedStore {
        &self.store
    }
}
