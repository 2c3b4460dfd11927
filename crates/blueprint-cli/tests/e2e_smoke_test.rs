use std::{fs, path::PathBuf};

use tempfile::tempdir;

use blueprint::{
    BlueprintError, Renderer,
    config::{AppConfig, OutputFormat},
    export::{self, Exporter},
    semantic::Diagram,
};
use blueprint_cli::{Args, render_views, task_tracker};

/// Records submitted diagrams and pretends to write `<filename>.png`.
#[derive(Default)]
struct RecordingExporter {
    titles: Vec<String>,
    fail_on: Option<&'static str>,
}

impl Exporter for RecordingExporter {
    fn export(&mut self, diagram: &Diagram) -> Result<Vec<PathBuf>, export::Error> {
        if self.fail_on == Some(diagram.filename()) {
            return Err(export::Error::Render("renderer unavailable".to_string()));
        }
        self.titles.push(diagram.title().to_string());
        Ok(vec![PathBuf::from(format!("{}.png", diagram.filename()))])
    }
}

fn dot_args(output_dir: &std::path::Path) -> Args {
    Args {
        output_dir: output_dir.to_string_lossy().to_string(),
        format: Some(OutputFormat::Dot),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_run_writes_three_diagrams() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let written = blueprint_cli::run(&dot_args(temp_dir.path())).expect("run succeeds");

    let expected: Vec<PathBuf> = [
        "task_tracker_system_context.dot",
        "task_tracker_system_containers.dot",
        "task_tracker_system_deployment.dot",
    ]
    .iter()
    .map(|name| temp_dir.path().join(name))
    .collect();
    assert_eq!(written, expected);

    for path in &expected {
        let content = fs::read_to_string(path).expect("output exists");
        assert!(content.contains("digraph"), "{} is not DOT", path.display());
    }

    let deployment = fs::read_to_string(&expected[2]).unwrap();
    assert!(deployment.contains("cluster_0"));
    assert!(deployment.contains("cluster_1"));
}

#[test]
fn e2e_rerun_is_idempotent() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = dot_args(temp_dir.path());

    let first_paths = blueprint_cli::run(&args).unwrap();
    let first: Vec<Vec<u8>> = first_paths.iter().map(|p| fs::read(p).unwrap()).collect();

    let second_paths = blueprint_cli::run(&args).unwrap();
    let second: Vec<Vec<u8>> = second_paths.iter().map(|p| fs::read(p).unwrap()).collect();

    assert_eq!(first_paths, second_paths);
    assert_eq!(first, second);
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 3);
}

#[test]
fn e2e_views_are_submitted_in_order() {
    let mut exporter = RecordingExporter::default();

    let written = render_views(&mut exporter).unwrap();

    assert_eq!(
        exporter.titles,
        vec![
            "Task Tracker System – System Context",
            "Task Tracker System – Containers",
            "Task Tracker System – Deployment (Dev)",
        ]
    );
    assert_eq!(written[0], PathBuf::from("task_tracker_system_context.png"));
}

#[test]
fn e2e_first_failure_stops_the_run() {
    let mut exporter = RecordingExporter {
        fail_on: Some("task_tracker_system_containers"),
        ..RecordingExporter::default()
    };

    let err = render_views(&mut exporter).unwrap_err();

    assert!(matches!(err, BlueprintError::Export(_)));
    assert_eq!(exporter.titles, vec!["Task Tracker System – System Context"]);
}

#[test]
fn e2e_system_context_renders_single_artifact() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let renderer = Renderer::new(AppConfig::default().with_format(OutputFormat::Dot));
    let diagram = task_tracker::system_context().unwrap();

    let written = renderer.render(&diagram, temp_dir.path()).unwrap();

    assert_eq!(
        written,
        vec![temp_dir.path().join("task_tracker_system_context.dot")]
    );
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
}

#[test]
fn e2e_missing_explicit_config_fails_before_writing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let mut args = dot_args(&temp_dir.path().join("out"));
    args.config = Some(temp_dir.path().join("absent.toml").to_string_lossy().to_string());

    let err = blueprint_cli::run(&args).unwrap_err();

    assert!(matches!(err, BlueprintError::Config(_)));
    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn e2e_invalid_config_color_fails_before_writing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[style]\nedge_color = \"grey-ish\"\n").unwrap();
    let mut args = dot_args(&temp_dir.path().join("out"));
    args.config = Some(config_path.to_string_lossy().to_string());

    let err = blueprint_cli::run(&args).unwrap_err();

    assert!(matches!(err, BlueprintError::Config(msg) if msg.contains("edge color")));
    assert!(!temp_dir.path().join("out").exists());
}
