//! Error types for heronav-core
//!
//! Only construction-time problems (bad configuration, malformed menus) are
//! errors. Interaction paths such as toggling or scroll delivery are infallible.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for heronav operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML in {path}: {message}")]
    YamlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unsupported config format for {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    // ===================
    // Menu Errors
    // ===================
    #[error("Menu entry at {path} has an empty name")]
    EmptyLabel { path: String },

    #[error("Menu entry at {path} has an empty href")]
    EmptyHref { path: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid elevation threshold {threshold} (release band {release_band})")]
    InvalidThreshold { threshold: f64, release_band: f64 },

    #[error("Invalid breakpoint: {breakpoint_px}px")]
    InvalidBreakpoint { breakpoint_px: u32 },
}
