//! Export functionality for Blueprint diagrams.
//!
//! This module provides the [`Exporter`] trait, the single seam through which
//! a finished [`Diagram`] leaves the process. Everything before it is a pure
//! data model; everything behind it writes files.
//!
//! # Pipeline Position
//!
//! ```text
//! DiagramBuilder
//!     ↓ build
//! Diagram
//!     ↓ export (this module)
//! Output Files
//! ```
//!
//! # Available Backends
//!
//! - [`graphviz`]: DOT translation and Graphviz rendering via
//!   [`graphviz::GraphvizExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`BlueprintError::Export`] at the crate
//! boundary.
//!
//! [`BlueprintError::Export`]: crate::BlueprintError::Export

/// Graphviz export backend.
pub mod graphviz;

use std::path::PathBuf;

use blueprint_core::semantic::Diagram;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Exports a diagram and returns the paths of the files written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the diagram cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export(&mut self, diagram: &Diagram) -> Result<Vec<PathBuf>, Error>;
}

/// Errors that can occur during diagram export.
///
/// This type is converted into [`BlueprintError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`BlueprintError::Export`]: crate::BlueprintError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
