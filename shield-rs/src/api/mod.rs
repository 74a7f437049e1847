//! REST API module for shield-rs
//!
//! Provides the HTTP endpoints for message, phone and URL analysis

pub mod handlers;
pub mod server;

pub use handlers::AppState;
pub use server::{build_router, ApiServer};
