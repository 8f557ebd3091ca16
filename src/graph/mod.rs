//! Relation resolution
//!
//! Turns normalized records into denormalized views on demand. Nothing here
//! writes to the store: every resolution builds a fresh view, so resolving
//! the same record twice yields the same result.

pub mod relations;
pub mod views;
pub mod resolver;

// Re-export main graph types
pub use relations::{CommentRelations, PostRelations, UserRelations};
pub use views::{CommentView, PostView, UserView};
pub use resolver::Resolver;
