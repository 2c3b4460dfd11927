//! Integration tests for the Renderer API
//!
//! These tests write Graphviz source only, so they do not need the `dot`
//! executable to be installed.

use std::fs;

use tempfile::tempdir;

use blueprint::{
    BlueprintError, Renderer,
    builder::DiagramBuilder,
    config::{AppConfig, OutputFormat},
    semantic::{Diagram, Direction, Label, Node, NodeCategory},
};

fn shop() -> Diagram {
    let mut builder = DiagramBuilder::new("Shop – Overview").with_direction(Direction::TopToBottom);
    let customer = builder
        .node(Node::new("customer", NodeCategory::Person, "Customer"))
        .unwrap();
    let api = builder
        .cluster(Label::new("Shop").with_kind("Software System"), |b| {
            b.node(Node::new(
                "api",
                NodeCategory::Server,
                Label::new("API").with_kind("Container").with_detail("Rust"),
            ))
        })
        .unwrap();
    builder.connect(customer, api).unwrap();
    builder.build().unwrap()
}

fn dot_renderer() -> Renderer {
    Renderer::new(AppConfig::default().with_format(OutputFormat::Dot))
}

#[test]
fn test_render_writes_one_file_per_format() {
    let dir = tempdir().expect("Failed to create temp directory");
    let diagram = shop();

    let written = dot_renderer()
        .render(&diagram, dir.path())
        .expect("Failed to render diagram");

    assert_eq!(written, vec![dir.path().join("shop_–_overview.dot")]);
    let content = fs::read_to_string(&written[0]).unwrap();
    assert!(content.contains("digraph"));
    assert!(content.contains("Customer"));
}

#[test]
fn test_rerender_overwrites_with_identical_content() {
    let dir = tempdir().expect("Failed to create temp directory");
    let renderer = dot_renderer();
    let diagram = shop();

    let path = renderer.render(&diagram, dir.path()).unwrap().remove(0);
    let first = fs::read(&path).unwrap();

    fs::write(&path, b"stale").unwrap();
    renderer.render(&diagram, dir.path()).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_render_creates_missing_output_directory() {
    let dir = tempdir().expect("Failed to create temp directory");
    let nested = dir.path().join("out").join("diagrams");

    let written = dot_renderer().render(&shop(), &nested).unwrap();
    assert!(written[0].starts_with(&nested));
    assert!(written[0].is_file());
}

#[test]
fn test_to_dot_matches_written_file() {
    let dir = tempdir().expect("Failed to create temp directory");
    let renderer = dot_renderer();
    let diagram = shop();

    let source = renderer.to_dot(&diagram).unwrap();
    let written = renderer.render(&diagram, dir.path()).unwrap();
    assert_eq!(fs::read_to_string(&written[0]).unwrap(), source);
}

#[test]
fn test_config_from_toml() {
    let config: AppConfig = toml::from_str(
        r##"
        [render]
        formats = ["svg", "dot"]

        [style]
        splines = "spline"
        edge_color = "#333333"
        "##,
    )
    .expect("valid config");

    assert_eq!(
        config.render().formats(),
        &[OutputFormat::Svg, OutputFormat::Dot]
    );
    assert_eq!(config.style().splines(), "spline");
    assert_eq!(config.style().font_name(), "Sans-Serif");
}

#[test]
fn test_invalid_style_surfaces_as_export_error() {
    let config: AppConfig = toml::from_str(
        r#"
        [render]
        formats = ["dot"]
        [style]
        background_color = "not a color"
        "#,
    )
    .unwrap();

    let dir = tempdir().expect("Failed to create temp directory");
    let result = Renderer::new(config).render(&shop(), dir.path());
    assert!(matches!(result, Err(BlueprintError::Export(_))));
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}
