//! Core logic for the activity signup service.
//!
//! Holds the in-memory [`ActivityRegistry`] and the two state
//! transitions it enforces (signup and unregister), the seed catalogue
//! the registry is populated from at startup, and the typed YAML
//! configuration for the service binary.
//!
//! # Modules
//!
//! - [`registry`] -- Activity registry and its transition errors
//! - [`seed`] -- Built-in seed catalogue and YAML seed loading
//! - [`config`] -- Typed configuration loaded from `signup-config.yaml`

pub mod config;
pub mod registry;
pub mod seed;

pub use config::{ConfigError, SignupConfig};
pub use registry::{ActivityRegistry, RegistryError};
pub use seed::SeedError;
