//! Error adapter for converting SrvizError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use srviz::SrvizError;

/// Adapter that gives a [`SrvizError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a SrvizError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            SrvizError::Io(_) => "srviz::io",
            SrvizError::Resolve(err) => err.code(),
            SrvizError::Config(_) => "srviz::config",
            SrvizError::InvalidArguments(_) => "srviz::args",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            SrvizError::Io(_) => Some("the configuration dump must be a readable UTF-8 text file"),
            SrvizError::Resolve(err) => err.help(),
            SrvizError::Config(_) => {
                Some("only the [resolve] and [style] sections are recognised; see `srviz --help`")
            }
            SrvizError::InvalidArguments(_) => Some("pass `--interface <NAME>` or `--list`"),
        };
        help.map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use srviz_parser::ResolveError;

    use super::*;

    #[test]
    fn test_resolve_error_code_and_help() {
        let err = SrvizError::from(ResolveError::InterfaceNotFound {
            name: "ghost".to_string(),
        });
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.to_string(), "interface `ghost` not found");
        assert_eq!(
            adapter.code().unwrap().to_string(),
            "srviz::resolve::interface_not_found"
        );
        assert!(adapter.help().unwrap().to_string().contains("--list"));
    }

    #[test]
    fn test_io_error_code() {
        let err = SrvizError::Io(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "srviz::io");
        assert_eq!(adapter.to_string(), "I/O error: no such file");
    }

    #[test]
    fn test_renders_through_graphical_handler() {
        let err = SrvizError::Config("Validation error: bad fill".to_string());
        let mut out = String::new();

        miette::GraphicalReportHandler::new()
            .render_report(&mut out, &ErrorAdapter(&err))
            .unwrap();

        assert!(out.contains("srviz::config"));
        assert!(out.contains("bad fill"));
    }
}
