//! End-to-end tests for the penguin report pipeline
//!
//! Each test writes a CSV into a temporary directory, runs the library the
//! way the binary does, and checks the report that lands on disk.

use approx::assert_relative_eq;
use penguin_report::{
    PenguinConfig, ReportError, Value, average_bill_depths, group_by_species, load_table,
    locate_above_average, penguin_records, run, write_report,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PALMER_SAMPLE: &str = "\
rowid,species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year
1,Adelie,Torgersen,39.1,18.7,181,3750,male,2007
2,Adelie,Torgersen,39.5,17.4,186,3800,female,2007
3,Adelie,Torgersen,40.3,18,195,3250,female,2007
4,Adelie,Torgersen,NA,NA,NA,NA,NA,2007
5,Gentoo,Biscoe,46.1,13.2,211,4500,female,2007
6,Gentoo,Biscoe,50,16.3,230,5700,male,2007
7,Chinstrap,Dream,46.5,17.9,192,3500,female,2007
8,Chinstrap,Dream,50,19.5,196,3900,male,2007
";

fn write_input(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("penguins.csv");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_full_report_from_csv() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), PALMER_SAMPLE);
    let output = dir.path().join("penguin_report.txt");

    let config = PenguinConfig::default()
        .with_input(&input)
        .with_output(&output);
    let summary = run(&config).unwrap();

    assert_eq!(summary.rows_loaded, 8);
    assert_eq!(summary.species_count, 3);
    assert_eq!(summary.species_without_data, 0);
    assert_eq!(summary.above_average, 3);

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains(" - Adelie: 18.03 mm\n"));
    assert!(report.contains(" - Gentoo: 14.75 mm\n"));
    assert!(report.contains(" - Chinstrap: 18.70 mm\n"));
    assert!(report.ends_with("Body Masses of Penguins Above Average Depth:\n3750g, 5700g, 3900g\n"));
}

#[test]
fn test_stages_compose_like_the_pipeline() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), PALMER_SAMPLE);

    let table = load_table(&input).unwrap();
    assert_eq!(table["bill_depth_mm"]["4"], Value::Text("NA".to_string()));
    assert_eq!(table["body_mass_g"]["6"], Value::Number(5700.0));

    let groups = group_by_species(&table, "species");
    let averages = average_bill_depths(&groups);
    assert_relative_eq!(
        averages["Adelie"].unwrap(),
        (18.7 + 17.4 + 18.0) / 3.0,
        epsilon = 1e-9
    );

    let records = penguin_records(&groups, "bill_depth_mm", "body_mass_g");
    assert_eq!(records.len(), 8);

    let masses = locate_above_average(&records, &averages);
    assert_eq!(masses, vec![3750.0, 5700.0, 3900.0]);
}

#[test]
fn test_round_trip_two_row_csv() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        "penguin_number,bill_length_mm,bill_depth_mm\n1,39.1,18.7\n2,39.5,17.4\n",
    );

    let table = load_table(&input).unwrap();

    assert_eq!(table["bill_depth_mm"]["2"], Value::Number(17.4));
    assert_eq!(table["bill_length_mm"]["1"], Value::Number(39.1));
}

#[test]
fn test_header_only_input_reports_no_data() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "rowid,species,bill_depth_mm,body_mass_g\n");
    let output = dir.path().join("report.txt");

    let config = PenguinConfig::default()
        .with_input(&input)
        .with_output(&output);
    let summary = run(&config).unwrap();

    assert_eq!(summary.rows_loaded, 0);
    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("No data available.\n"));
    assert!(report.ends_with("None\n"));
}

#[test]
fn test_species_with_only_missing_depths() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        "rowid,species,bill_depth_mm,body_mass_g\n1,Adelie,NA,3700\n2,Gentoo,15.0,5000\n3,Gentoo,16.0,5200\n",
    );
    let output = dir.path().join("report.txt");

    let config = PenguinConfig::default()
        .with_input(&input)
        .with_output(&output);
    let summary = run(&config).unwrap();

    assert_eq!(summary.species_without_data, 1);
    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains(" - Adelie: N/A\n"));
    assert!(report.contains(" - Gentoo: 15.50 mm\n"));
    assert!(report.ends_with("5200g\n"));
}

#[test]
fn test_rerun_overwrites_previous_report() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("report.txt");

    let mut first = penguin_report::Averages::new();
    first.insert("Adelie".to_string(), Some(18.0));
    write_report(&first, &[3700.0, 3800.0, 3900.0], &output).unwrap();

    let input = write_input(dir.path(), "rowid,species,bill_depth_mm,body_mass_g\n");
    let config = PenguinConfig::default()
        .with_input(&input)
        .with_output(&output);
    run(&config).unwrap();

    let report = fs::read_to_string(&output).unwrap();
    assert!(!report.contains("Adelie"));
    assert!(!report.contains("3700g"));
}

#[test]
fn test_missing_input_fails_without_report() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("report.txt");

    let config = PenguinConfig::default()
        .with_input(dir.path().join("nope.csv"))
        .with_output(&output);

    assert!(matches!(run(&config), Err(ReportError::InputNotFound { .. })));
    assert!(!output.exists());
}
