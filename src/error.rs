//! Error types for the phone mask library.
//!
//! This module defines custom error types using `thiserror`. Formatting
//! and binding themselves are infallible by design (bad input degrades
//! to a partial mask), so configuration loading is the only fallible
//! surface.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
