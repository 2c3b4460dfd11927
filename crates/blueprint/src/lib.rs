//! Blueprint - architecture diagram descriptions rendered through Graphviz.
//!
//! Diagrams are described with the typed model re-exported from
//! `blueprint-core` and handed to a [`Renderer`], which translates them to
//! DOT and lets the Graphviz layout engine produce the image files.

pub mod config;
pub mod export;

mod error;

pub use blueprint_core::{DiagramError, builder, color, identifier, semantic};

pub use error::BlueprintError;

use std::path::{Path, PathBuf};

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, graphviz::GraphvizExporter};
use semantic::Diagram;

/// Renders diagrams with a fixed configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use blueprint::{
///     Renderer,
///     builder::DiagramBuilder,
///     config::AppConfig,
///     semantic::{Node, NodeCategory},
/// };
///
/// let mut builder = DiagramBuilder::new("Hello");
/// let a = builder.node(Node::new("a", NodeCategory::Person, "A")).unwrap();
/// let b = builder.node(Node::new("b", NodeCategory::Server, "B")).unwrap();
/// builder.connect(a, b).unwrap();
/// let diagram = builder.build().unwrap();
///
/// let renderer = Renderer::new(AppConfig::default());
/// let written = renderer.render(&diagram, ".").expect("Failed to render");
/// println!("{written:?}");
/// ```
#[derive(Default)]
pub struct Renderer {
    config: AppConfig,
}

impl Renderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Translate a diagram to Graphviz source text.
    ///
    /// # Errors
    ///
    /// Returns `BlueprintError::Export` if a configured color is invalid.
    pub fn to_dot(&self, diagram: &Diagram) -> Result<String, BlueprintError> {
        let source = export::graphviz::to_dot(diagram, self.config.style())?;
        trace!(source = source.as_str(); "Generated DOT");
        Ok(source)
    }

    /// Create an exporter writing into `output_dir`.
    pub fn exporter(&self, output_dir: impl Into<PathBuf>) -> GraphvizExporter<'_> {
        GraphvizExporter::new(&self.config, output_dir)
    }

    /// Render a diagram into `output_dir`, once per configured format.
    ///
    /// Returns the paths written, in format order. Existing files are
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Returns `BlueprintError::Export` if Graphviz is unavailable or fails,
    /// or if the output directory is not writable.
    pub fn render(
        &self,
        diagram: &Diagram,
        output_dir: impl AsRef<Path>,
    ) -> Result<Vec<PathBuf>, BlueprintError> {
        info!(diagram = diagram.title(), direction:% = diagram.direction(); "Rendering diagram");
        debug!(nodes = diagram.node_count(), edges = diagram.edge_count(); "Diagram size");

        let written = self.exporter(output_dir.as_ref()).export(diagram)?;
        Ok(written)
    }
}
