//! Shared type definitions for the activity signup service.
//!
//! This crate is the single source of truth for the records exchanged
//! between the registry, the HTTP adapter, and the browser frontend.
//! Types defined here flow downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`activity`] -- The [`Activity`] record and its participant roster

pub mod activity;

// Re-export all public types at crate root for convenience.
pub use activity::Activity;
