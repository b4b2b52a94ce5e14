//! End-to-end tests for the `personas` binary.
//!
//! Each test runs the compiled binary inside its own temporary working directory.

use std::path::Path;
use std::process::{Command, Output};

use personas::config::{AGE_RANGE, CITIES, NAMES};

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_personas"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run personas binary")
}

#[test]
fn test_writes_personas_csv() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path());

    assert!(output.status.success(), "{output:?}");
    assert!(output.stdout.is_empty());

    let contents = std::fs::read_to_string(dir.path().join("personas.csv")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 51);
    assert_eq!(lines[0], "Name,Age,City");

    for line in &lines[1..] {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 3, "{line}");
        assert!(NAMES.contains(&fields[0]), "{line}");
        assert!(AGE_RANGE.contains(&fields[1].parse::<u8>().unwrap()), "{line}");
        assert!(CITIES.contains(&fields[2]), "{line}");
    }
}

#[test]
fn test_second_run_keeps_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("personas.csv");

    assert!(run_in(dir.path()).status.success());
    let first = std::fs::read_to_string(&path).unwrap();
    assert!(run_in(dir.path()).status.success());
    let second = std::fs::read_to_string(&path).unwrap();

    assert_eq!(first.lines().count(), 51);
    assert_eq!(second.lines().count(), 51);
    assert_eq!(first.lines().next(), second.lines().next());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    // A directory squatting on the output name makes File::create fail.
    std::fs::create_dir(dir.path().join("personas.csv")).unwrap();

    let output = run_in(dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to write personas.csv"), "{stderr}");
    assert!(dir.path().join("personas.csv").is_dir());
}
