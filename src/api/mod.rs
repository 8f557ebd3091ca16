//! # API Module
//!
//! HTTP interface for the social graph:
//! - a named-operation dispatcher covering every query and mutation
//! - read-only REST routes for users and posts
//! - system health, information and metrics endpoints
//!
//! ## Endpoints Overview
//!
//! ### Operations
//! - `POST /api/operations` - Run `{"operation", "arguments", "select"}`
//!
//! ### Users and Posts
//! - `GET /api/users` - List users
//! - `GET /api/users/{id}` - Get user by ID
//! - `GET /api/posts` - List posts
//! - `GET /api/posts/{id}` - Get post by ID
//!
//! All four accept `?select=rel1,rel2` to limit the resolved relations.
//!
//! ### System Essentials
//! - `GET /health` - Health check
//! - `GET /info` - Service info and supported operations
//! - `GET /metrics` - Prometheus metrics

pub mod dispatch;
pub mod handlers;
pub mod routes;
pub mod server;

// Re-export commonly used items
pub use dispatch::{dispatch, Operation, OperationRequest};
pub use handlers::{ApiResponse, ErrorResponse, OperationResponse};
pub use server::{create_app, start_server};
