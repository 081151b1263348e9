//! Tests of the `ecosystem-viz` executable
//!
//! The binary always reads `ecosystem_data.csv` from its working directory,
//! so each test runs it inside a fresh temporary directory.

use std::path::Path;
use std::process::{Command, Output};

mod common;
use common::{mixed_species_csv, png_files};

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ecosystem-viz"))
        .current_dir(dir)
        .output()
        .expect("failed to run ecosystem-viz")
}

#[test]
fn test_missing_input_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ecosystem_data.csv"), "stderr: {}", stderr);
    assert!(png_files(dir.path()).is_empty());
}

#[test]
fn test_malformed_input_fails_without_charts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("ecosystem_data.csv"),
        "TimeStep,Deer\n0,ten\n",
    )
    .unwrap();

    let output = run_in(dir.path());

    assert!(!output.status.success());
    assert!(png_files(dir.path()).is_empty());
}

#[test]
fn test_full_run_writes_two_charts() {
    let dir = tempfile::tempdir().unwrap();
    mixed_species_csv(dir.path());

    let output = run_in(dir.path());

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Loaded 5 timesteps with 4 species"));
    assert!(stdout.contains("ECOSYSTEM STATISTICS SUMMARY"));
    assert!(stdout.contains("Initial total population: 241"));
    assert!(stdout.contains("Final total population: 215"));

    let charts = png_files(dir.path());
    assert_eq!(charts.len(), 2);
    assert!(charts[0].starts_with("population_dynamics_"));
    assert!(charts[1].starts_with("trophic_levels_"));
}

#[test]
fn test_consecutive_runs_do_not_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    mixed_species_csv(dir.path());

    assert!(run_in(dir.path()).status.success());
    assert!(run_in(dir.path()).status.success());

    let charts = png_files(dir.path());
    assert_eq!(charts.len(), 4);
    assert_eq!(
        charts.iter().filter(|c| c.starts_with("population_dynamics_")).count(),
        2
    );
}
