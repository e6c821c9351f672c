//! HTTP adapter for the activity signup service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **REST endpoints** for listing activities and for signing students
//!   up to, or removing them from, an activity's roster
//! - **HTML index page** (`GET /`) showing every activity with its
//!   schedule, remaining spots, and current participants
//!
//! # Architecture
//!
//! The [`ActivityRegistry`](signup_core::ActivityRegistry) is built
//! explicitly at startup and handed to [`AppState`], which guards it
//! with a single async read-write lock. Listing takes a read guard;
//! signup and unregister hold the write guard across their
//! check-then-mutate sequence so concurrent requests on the same roster
//! never interleave. Registry errors are mapped to HTTP status codes by
//! [`ApiError`].

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod views;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
