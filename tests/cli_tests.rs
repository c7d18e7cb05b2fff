/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use clap::Parser;
use mie_rs::cli::{run, simulate, Cli};
use mie_rs::input::{InputError, SimulationConfig};
use mie_rs::mie::{MieSpectrum, Quantity};
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

/// Test helper to create a temporary simulation description
fn create_config_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("sphere.json");
    let mut file = File::create(&file_path).unwrap();
    writeln!(file, "{}", content).unwrap();
    (dir, file_path)
}

const GOLD_IN_WATER: &str = r#"{
    "wavelengths": { "start": 450.0, "stop": 650.0, "points": 5 },
    "material": { "type": "named", "name": "gold" },
    "radius": 20.0,
    "options": { "medium": 1.33, "as_efficiency": false }
}"#;

#[test]
fn test_config_file_round_trip_through_simulation() {
    let (_dir, path) = create_config_file(GOLD_IN_WATER);
    let config = SimulationConfig::from_file(&path).unwrap();
    let spectrum = simulate(&config).unwrap();

    assert_eq!(spectrum.quantity, Quantity::CrossSection);
    assert_eq!(spectrum.wavelengths(), vec![450.0, 500.0, 550.0, 600.0, 650.0]);
    assert!(spectrum.records.iter().all(|r| r.extinction > 0.0));
}

#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    let result = SimulationConfig::from_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(InputError::IoError(_))));
}

#[test]
fn test_run_writes_json_output() {
    let (dir, path) = create_config_file(GOLD_IN_WATER);
    let output = dir.path().join("spectrum.json");
    let cli = Cli::parse_from([
        "mie-rs",
        "--config",
        path.to_str().unwrap(),
        "--format",
        "json",
        "--output",
        output.to_str().unwrap(),
    ]);
    run(&cli).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let spectrum: MieSpectrum = serde_json::from_str(&text).unwrap();
    assert_eq!(spectrum.len(), 5);
    assert_eq!(spectrum.quantity, Quantity::CrossSection);
}

#[test]
fn test_run_writes_csv_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("spectrum.csv");
    let cli = Cli::parse_from([
        "mie-rs",
        "--epsilon-re",
        "2.25",
        "--radius",
        "50",
        "--points",
        "4",
        "--output",
        output.to_str().unwrap(),
    ]);
    run(&cli).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("wavelength,extinction_efficiency"));
    assert!(lines[1].starts_with("400,"));
    assert_eq!(lines[4].split(',').count(), 4);
}

#[test]
fn test_invalid_flags_are_reported() {
    let cli = Cli::parse_from(["mie-rs", "--radius", "0", "--material", "gold"]);
    assert!(run(&cli).is_err());
}
