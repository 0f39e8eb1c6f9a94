//! Error types
//!
//! The health formulas never fail; these cover the places where data enters
//! the process.

use std::path::PathBuf;

use thiserror::Error;

/// A profile that breaks the biometric invariants
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("Profile name cannot be empty")]
    EmptyName,

    #[error("age must be greater than 0 (got {0})")]
    InvalidAge(u32),

    #[error("weight must be a positive number of kg (got {0})")]
    InvalidWeight(f64),

    #[error("height must be a positive number of cm (got {0})")]
    InvalidHeight(f64),

    #[error("target weight must be a positive number of kg (got {0})")]
    InvalidTargetWeight(f64),
}

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read profile file {path}: {source}")]
    ProfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse profile file {path}: {source}")]
    ProfileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid profile in {path}: {source}")]
    InvalidProfile {
        path: PathBuf,
        #[source]
        source: ProfileError,
    },

    #[error("Invalid date in {var}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { var: &'static str, value: String },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
