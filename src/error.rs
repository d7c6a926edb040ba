//! Centralized error types for releasectl
//!
//! Uses thiserror for typed errors that can be matched on,
//! while still being compatible with anyhow for propagation.

use thiserror::Error;

/// Top-level error type for releasectl
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Release error: {0}")]
    Release(#[from] ReleaseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while resolving or listing releases
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReleaseError {
    #[error("Could not resolve namespace: {message}")]
    NamespaceResolution { message: String },

    #[error("Release store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Namespace {namespace} not found or has no Release resource type")]
    NotFound { namespace: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },
}
