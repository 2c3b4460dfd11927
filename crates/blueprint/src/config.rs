//! Configuration types for Blueprint diagram rendering.
//!
//! This module provides configuration structures that control which files are
//! written and how diagrams are styled. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining render and style settings.
//! - [`RenderConfig`] - Controls which [`OutputFormat`]s are produced.
//! - [`StyleConfig`] - Controls fonts, spacing and colors handed to the layout engine.
//!
//! # Example
//!
//! ```
//! # use blueprint::config::{AppConfig, OutputFormat};
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.render().formats(), &[OutputFormat::Png]);
//! assert!(config.style().background_color().is_ok());
//! ```

use std::{collections::HashMap, fmt, str::FromStr};

use serde::Deserialize;

use blueprint_core::{color::Color, semantic::NodeCategory};

/// Top-level application configuration combining render and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render and style configurations.
    pub fn new(render: RenderConfig, style: StyleConfig) -> Self {
        Self { render, style }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replace the configured output formats with a single one.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.render.formats = vec![format];
        self
    }
}

/// File formats the renderer can produce.
///
/// The names match external configuration strings and file extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Png,
    Svg,
    Jpg,
    Pdf,
    /// Graphviz source text. Written without invoking the layout engine.
    Dot,
}

impl OutputFormat {
    /// File extension appended to a diagram's filename.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Jpg => "jpg",
            Self::Pdf => "pdf",
            Self::Dot => "dot",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "pdf" => Ok(Self::Pdf),
            "dot" | "gv" => Ok(Self::Dot),
            _ => Err(format!(
                "unsupported output format `{s}` (expected png, svg, jpg, pdf or dot)"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Formats written for every diagram, in order.
    formats: Vec<OutputFormat>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            formats: vec![OutputFormat::Png],
        }
    }
}

impl RenderConfig {
    pub fn new(formats: Vec<OutputFormat>) -> Self {
        Self { formats }
    }

    /// Returns the configured [`OutputFormat`]s.
    pub fn formats(&self) -> &[OutputFormat] {
        &self.formats
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Fields that are not set fall back to the defaults below, which mirror the
/// look of common architecture diagram tooling.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Diagram background [`Color`], as a color string.
    background_color: Option<String>,

    font_name: String,
    font_size: f32,
    node_font_size: f32,

    /// Minimum space between nodes of the same rank, in inches.
    node_separation: f32,

    /// Minimum space between ranks, in inches.
    rank_separation: f32,

    /// Edge routing mode (`ortho`, `spline`, `polyline`, ...).
    splines: String,

    edge_color: String,

    /// Fill color overrides keyed by node category.
    categories: HashMap<NodeCategory, String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            font_name: "Sans-Serif".to_string(),
            font_size: 15.0,
            node_font_size: 13.0,
            node_separation: 0.6,
            rank_separation: 0.75,
            splines: "ortho".to_string(),
            edge_color: "#7B8894".to_string(),
            categories: HashMap::new(),
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn node_font_size(&self) -> f32 {
        self.node_font_size
    }

    pub fn node_separation(&self) -> f32 {
        self.node_separation
    }

    pub fn rank_separation(&self) -> f32 {
        self.rank_separation
    }

    pub fn splines(&self) -> &str {
        &self.splines
    }

    /// Returns the parsed default edge [`Color`].
    pub fn edge_color(&self) -> Result<Color, String> {
        Color::new(&self.edge_color).map_err(|err| format!("Invalid edge color in config: {err}"))
    }

    /// Returns the configured fill override for `category`, if any.
    pub fn category_fill(&self, category: NodeCategory) -> Result<Option<Color>, String> {
        self.categories
            .get(&category)
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid {category} fill color in config: {err}"))
    }
}
