//! Errors reported by interface resolution.
//!
//! Missing attributes, services or peers are not errors; they resolve to
//! `None`. The only failure is a target interface that is not declared at all.

use thiserror::Error;

/// Error returned by [`resolve`](crate::resolve).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("interface `{name}` not found")]
    InterfaceNotFound { name: String },
}

impl ResolveError {
    /// Returns a stable, searchable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ResolveError::InterfaceNotFound { .. } => "srviz::resolve::interface_not_found",
        }
    }

    /// Returns a hint for fixing the error, if there is one.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ResolveError::InterfaceNotFound { .. } => {
                Some("interface names are case-sensitive; run with `--list` to see declared interfaces")
            }
        }
    }
}
