//! Core system types and foundations
//!
//! Record types, error handling, configuration, logging and the shared
//! application state.

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod app_state;

// Re-export commonly used items
pub use types::{Comment, CommentId, Post, PostId, Record, User, UserId};
pub use error::{Error, Result};
pub use config::Config;
pub use app_state::AppState;
