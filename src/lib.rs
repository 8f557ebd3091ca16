//! Social Graph - an in-memory social graph with on-demand relation resolution
//!
//! Users, posts and comments live in three append-only collections and refer
//! to each other by id. Relations (a user's posts, followers and followed
//! users, a post's author, likes and comments) are never stored as nested
//! data; they are resolved from the collections each time a view is built.
#![warn(missing_docs)]

// Core foundational modules
pub mod core;

// Main functional modules
pub mod storage;
pub mod graph;
pub mod ops;
pub mod api;
pub mod system;

// Re-export commonly used items for convenience
pub use core::{AppState, Config, Error, Result};
pub use graph::{PostRelations, UserRelations, CommentRelations};
pub use ops::Handlers;
pub use storage::{MemStore, SharedStore};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
