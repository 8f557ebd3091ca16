//! In-memory entity store.
//!
//! Three independent append-only collections (users, posts, comments) holding
//! normalized records. The store is constructed empty, never persisted, and
//! shared across request handlers as a [`SharedStore`]: every mutation takes
//! the write lock, so writes are serialized and immediately visible to the
//! next read.

use crate::core::types::{Comment, Post, User};
use crate::storage::Collection;
use parking_lot::RwLock;
use std::sync::Arc;

/// Store handle shared between handlers (one lock per process)
pub type SharedStore = Arc<RwLock<MemStore>>;

/// Process-local store of users, posts and comments
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    /// User records
    pub users: Collection<User>,
    /// Post records
    pub posts: Collection<Post>,
    /// Comment records
    pub comments: Collection<Comment>,
}

/// Record counts per collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StoreStats {
    /// Number of users
    pub users: usize,
    /// Number of posts
    pub posts: usize,
    /// Number of comments
    pub comments: usize,
}

impl MemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the store for sharing between handlers
    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// Insert the demo dataset: Alice, Bob and one post by Alice
    pub fn seed_demo_data(&mut self) {
        let alice = self.users.insert(User::new("Alice", "alice@example.com")).id.clone();
        self.users.insert(User::new("Bob", "bob@example.com"));
        self.posts.insert(Post::new("First Post", "Hello World", alice));
        tracing::debug!("Seeded demo data: {:?}", self.stats());
    }

    /// Current record counts
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            users: self.users.len(),
            posts: self.posts.len(),
            comments: self.comments.len(),
        }
    }
}
