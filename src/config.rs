//! Configuration for the field binder.
//!
//! This module handles loading binder settings from environment
//! variables, with sensible defaults matching the canonical
//! `(00) 00000-0000` pattern. A `.env` file is honored if present.

use crate::error::{ConfigError, ConfigResult};
use crate::mask;
use std::env;

/// Settings applied to every field the binder masks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskConfig {
    /// Placeholder assigned to fields that have none (default: the
    /// canonical pattern `(00) 00000-0000`)
    pub placeholder: String,

    /// Maximum displayed length assigned to bound fields (default: 15,
    /// the length of the fully formatted pattern)
    pub max_length: usize,
}

impl MaskConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONE_MASK_PLACEHOLDER`: placeholder text (default: `(00) 00000-0000`)
    /// - `PHONE_MASK_MAX_LENGTH`: display length limit (default: 15)
    ///
    /// The length limit must be at least the formatted pattern length,
    /// otherwise typing could never reach a complete number.
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; missing files are fine.
        let _ = dotenvy::dotenv();

        let placeholder = env::var("PHONE_MASK_PLACEHOLDER")
            .unwrap_or_else(|_| mask::PLACEHOLDER.to_string());

        let max_length = Self::parse_env_usize("PHONE_MASK_MAX_LENGTH", mask::FORMATTED_MAX_LEN)?;

        if max_length < mask::FORMATTED_MAX_LEN {
            return Err(ConfigError::InvalidValue {
                var: "PHONE_MASK_MAX_LENGTH".to_string(),
                reason: format!("Must be at least {}", mask::FORMATTED_MAX_LEN),
            });
        }

        Ok(MaskConfig {
            placeholder,
            max_length,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        MaskConfig {
            placeholder: mask::PLACEHOLDER.to_string(),
            max_length: mask::FORMATTED_MAX_LEN,
        }
    }
}
