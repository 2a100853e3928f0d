//! End-to-end tests for the `squarebuf` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use shapefile::dbase::{FieldName, FieldValue, Record, TableWriterBuilder};
use tempfile::TempDir;

/// Writes a two-feature point dataset with a single text field.
fn write_sample_points(path: &Path) {
    let table = TableWriterBuilder::new()
        .add_character_field(FieldName::try_from("name").unwrap(), 50);
    let mut writer = shapefile::Writer::from_path(path, table).unwrap();

    for (point, name) in [
        (shapefile::Point::new(1000.0, 2000.0), "alpha"),
        (shapefile::Point::new(-500.0, 250.0), "beta"),
    ] {
        let mut record = Record::default();
        record.insert(
            "name".to_string(),
            FieldValue::Character(Some(name.to_string())),
        );
        writer.write_shape_and_record(&point, &record).unwrap();
    }
}

#[test]
fn drivers_command_lists_the_shapefile_driver() {
    Command::cargo_bin("squarebuf")
        .unwrap()
        .arg("drivers")
        .assert()
        .success()
        .stdout(predicate::str::contains("ESRI Shapefile"))
        .stdout(predicate::str::contains("Supported"));
}

#[test]
fn buffer_command_writes_the_output_dataset() {
    let temp_dir = TempDir::new().unwrap();
    write_sample_points(&temp_dir.path().join("samplePoints.shp"));

    Command::cargo_bin("squarebuf")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["buffer", "--distance", "50"])
        .assert()
        .success();

    let output = temp_dir.path().join("output");
    assert!(output.join("squareBuffers.shp").exists());
    assert!(output.join("squareBuffers.dbf").exists());
    assert!(output.join("squareBuffers.prj").exists());

    let mut reader = shapefile::Reader::from_path(output.join("squareBuffers.shp")).unwrap();
    assert_eq!(reader.iter_shapes_and_records().count(), 2);
}

#[test]
fn buffer_command_fails_on_missing_input() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("squarebuf")
        .unwrap()
        .current_dir(temp_dir.path())
        .arg("buffer")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn info_command_displays_the_schema() {
    let temp_dir = TempDir::new().unwrap();
    write_sample_points(&temp_dir.path().join("samplePoints.shp"));

    Command::cargo_bin("squarebuf")
        .unwrap()
        .current_dir(temp_dir.path())
        .args(["info", "samplePoints"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Geometry: Point"))
        .stdout(predicate::str::contains("Features: 2"))
        .stdout(predicate::str::contains("name"));
}
