//! CLI logic for the Blueprint diagram renderer.
//!
//! Builds the Task Tracker architecture views and renders each of them
//! through Graphviz.

pub mod error_adapter;
pub mod task_tracker;

mod args;
mod config;

pub use args::Args;

use std::path::PathBuf;

use log::info;

use blueprint::{BlueprintError, Renderer, export::Exporter};

/// Run the Blueprint CLI application
///
/// Renders every Task Tracker view, in order, into the output directory.
///
/// # Errors
///
/// Returns `BlueprintError` for:
/// - Configuration loading errors
/// - Diagram construction errors
/// - Rendering errors (Graphviz missing or failing)
/// - File I/O errors
///
/// The first failure stops the run.
pub fn run(args: &Args) -> Result<Vec<PathBuf>, BlueprintError> {
    info!(output_dir = args.output_dir.as_str(); "Rendering Task Tracker diagrams");

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(format) = args.format {
        app_config = app_config.with_format(format);
    }

    let renderer = Renderer::new(app_config);
    let mut exporter = renderer.exporter(&args.output_dir);
    render_views(&mut exporter)
}

/// Build each Task Tracker view and hand it to `exporter`, one after another.
///
/// Returns every path written, in view order.
pub fn render_views(exporter: &mut impl Exporter) -> Result<Vec<PathBuf>, BlueprintError> {
    let mut written = Vec::new();
    for build in task_tracker::views() {
        let diagram = build()?;
        info!(diagram = diagram.title(); "Exporting diagram");
        written.extend(exporter.export(&diagram)?);
    }

    info!(files = written.len(); "All diagrams exported");
    Ok(written)
}
