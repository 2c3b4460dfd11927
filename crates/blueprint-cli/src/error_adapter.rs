//! Error adapter for converting BlueprintError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use blueprint::BlueprintError;

/// Adapter giving a [`BlueprintError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a> {
    err: &'a BlueprintError,
}

impl<'a> ErrorAdapter<'a> {
    /// Create a new error adapter.
    pub fn new(err: &'a BlueprintError) -> Self {
        Self { err }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for ErrorAdapter<'_> {}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            BlueprintError::Io(_) => "blueprint::io",
            BlueprintError::Diagram(_) => "blueprint::diagram",
            BlueprintError::Config(_) => "blueprint::config",
            BlueprintError::Export(_) => "blueprint::export",
        };
        Some(Box::new(code) as Box<dyn fmt::Display>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err {
            BlueprintError::Io(_) => "check that the output directory exists and is writable",
            BlueprintError::Diagram(_) => {
                "every node id must be unique and declared before edges reference it"
            }
            BlueprintError::Config(_) => "fix the configuration file or pass a different --config",
            BlueprintError::Export(_) => {
                "rendering needs the Graphviz `dot` executable on PATH; use --format dot to skip it"
            }
        };
        Some(Box::new(help) as Box<dyn fmt::Display>)
    }
}

/// Convert a [`BlueprintError`] into a reportable diagnostic.
pub fn to_reportable(err: &BlueprintError) -> ErrorAdapter<'_> {
    ErrorAdapter::new(err)
}

#[cfg(test)]
mod tests {
    use blueprint::DiagramError;

    use super::*;

    #[test]
    fn test_code_and_help_per_variant() {
        let err = BlueprintError::Config("bad".to_string());
        let adapter = to_reportable(&err);
        assert_eq!(adapter.code().unwrap().to_string(), "blueprint::config");
        assert!(adapter.help().unwrap().to_string().contains("--config"));
        assert_eq!(adapter.to_string(), "Configuration error: bad");
    }

    #[test]
    fn test_graphical_report_renders() {
        let err = BlueprintError::from(DiagramError::NoOpenCluster);
        let mut out = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut out, &to_reportable(&err))
            .unwrap();
        assert!(out.contains("no cluster is open"));
        assert!(out.contains("blueprint::diagram"));
    }
}
