use std::{fs, path::Path};

use tempfile::tempdir;

use stratus::{Args, StratusError, export::graphviz::Graphviz};

fn args_for(output: &Path, format: &str) -> Args {
    Args {
        output: output.to_string_lossy().to_string(),
        format: format.to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_dot_output_is_written_and_deterministic() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("aws_architecture.dot");

    stratus::run(&args_for(&output, "dot")).expect("dot export should succeed");
    let first = fs::read_to_string(&output).expect("output file should exist");
    assert!(first.starts_with("digraph"), "output should be a DOT digraph");

    stratus::run(&args_for(&output, "dot")).expect("second dot export should succeed");
    let second = fs::read_to_string(&output).expect("output file should exist");

    assert_eq!(first, second, "repeated runs must produce identical output");
}

#[test]
fn e2e_missing_parent_directories_are_created() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("docs").join("aws_architecture.dot");

    stratus::run(&args_for(&output, "dot")).expect("dot export should succeed");
    assert!(output.exists());
}

#[test]
fn e2e_image_render_is_soft_on_missing_graphviz() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("aws_architecture.png");

    // Must not error either way: with Graphviz installed it renders,
    // without it the run reports guidance and produces no file.
    stratus::run(&args_for(&output, "png")).expect("png generation should not error");

    match Graphviz::detect() {
        Some(_) => {
            let rendered = fs::read(&output).expect("PNG should exist with Graphviz installed");
            assert!(!rendered.is_empty());
        }
        None => {
            assert!(!output.exists(), "no output file may be created without Graphviz");
        }
    }
}

#[test]
fn e2e_invalid_format_is_rejected() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("aws_architecture.jpeg");

    let err = stratus::run(&args_for(&output, "jpeg")).expect_err("jpeg is not a valid format");
    assert!(matches!(err, StratusError::Config(_)));
    assert!(!output.exists());
}
