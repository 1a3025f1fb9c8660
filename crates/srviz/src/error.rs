//! Error types for srviz operations.
//!
//! This module provides the main error type [`SrvizError`] which wraps the
//! failures that can occur while loading, resolving and rendering.

use std::io;

use thiserror::Error;

use srviz_parser::ResolveError;

/// The main error type for srviz operations.
#[derive(Debug, Error)]
pub enum SrvizError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
