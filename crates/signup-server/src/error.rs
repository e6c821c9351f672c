//! Error types for the signup server binary.
//!
//! [`ServerBinError`] is the top-level error type that wraps all possible
//! failure modes during startup and serving.

/// Top-level error for the signup server binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ServerBinError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: signup_core::ConfigError,
    },

    /// The seed catalogue could not be loaded or failed validation.
    #[error("seed error: {source}")]
    Seed {
        /// The underlying seed error.
        #[from]
        source: signup_core::SeedError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: signup_api::ServerError,
    },
}
