//! Error types for Blueprint operations.
//!
//! This module provides the main error type [`BlueprintError`] which wraps
//! the error conditions that can occur while describing and rendering
//! diagrams.

use std::io;

use thiserror::Error;

use blueprint_core::DiagramError;

/// The main error type for Blueprint operations.
#[derive(Debug, Error)]
pub enum BlueprintError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Diagram error: {0}")]
    Diagram(#[from] DiagramError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for BlueprintError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
