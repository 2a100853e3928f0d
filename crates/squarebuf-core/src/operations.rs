//! Core pipeline operations for the square buffer tool.
//!
//! This module provides the main batch operation — read a point dataset,
//! buffer every feature into a square polygon, and write the result as a new
//! dataset — plus dataset inspection, leveraging the driver registry for
//! format capability checks.

use std::fs;
use std::path::{Path, PathBuf};

use geo_types::Point;
use log::{info, warn};
use shapefile::dbase;
use shapefile::{PolygonRing, Shape};

use crate::buffer::square_buffer;
use crate::drivers::{Driver, SupportStatus};
use crate::error::{DriverError, FormatError, IoError, IoErrorExt, Result};
use crate::srs::SpatialRef;
use crate::types::{DatasetInfo, FieldInfo};
use crate::utils::FieldTypeExt;

/// Default input dataset name, resolved in the current working directory.
pub const DEFAULT_INPUT: &str = "samplePoints";

/// Default output folder, recreated on every run.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Name of the dataset created inside the output folder.
pub const OUTPUT_DATASET: &str = "squareBuffers";

/// Generates square buffers around every point of the input dataset.
///
/// This function orchestrates the full pipeline: it reads point features and
/// their attribute records from `input`, computes an axis-aligned square of
/// side `2 * distance` centered on each point, replaces `output_dir`
/// destructively, and writes one polygon feature per input point into
/// `output_dir/squareBuffers.shp` with its original attributes copied
/// verbatim. The output attribute schema is copied from the input table, and
/// the `.prj` sidecar is stamped with `srs`.
///
/// A bare input name (no extension) is resolved by appending `.shp`.
///
/// # Errors
///
/// This function will return an error if:
/// - The driver does not support reading or writing.
/// - The input dataset does not exist or cannot be read.
/// - A feature's geometry is not a single point.
/// - The output folder cannot be replaced, or the output files cannot be written.
pub fn buffer(
    input: &str,
    output_dir: &Path,
    distance: f64,
    driver: &Driver,
    srs: &SpatialRef,
) -> Result<()> {
    info!("Starting square buffer run:");
    info!("Input: {} (Driver: {})", input, driver.short_name);
    info!("Output folder: {}", output_dir.display());
    info!("Buffer distance: {distance}");

    require_capability(driver, "reading", driver.capabilities.read)?;
    require_capability(driver, "writing", driver.capabilities.write)?;

    let input_path = resolve_dataset_path(input);
    if !input_path.exists() {
        return Err(IoError::FileNotFound { path: input_path }.into());
    }

    let mut reader = shapefile::Reader::from_path(&input_path)
        .with_read_context(driver.short_name, &input_path)?;

    // Squares and records accumulate in parallel, indexed identically.
    let mut squares = Vec::new();
    let mut records = Vec::new();
    for (index, shape_record) in reader.iter_shapes_and_records().enumerate() {
        let (shape, record) = shape_record.with_read_context(driver.short_name, &input_path)?;
        let origin = point_coordinates(&shape, index)?;
        squares.push(square_buffer(origin, distance));
        records.push(record);
    }
    info!("Buffered {} point feature(s)", squares.len());

    // The output schema is the input schema: names, type tags, and widths.
    let table_info = reader.into_table_info();

    replace_output_dir(output_dir)?;

    let dataset_path = output_dir.join(format!("{OUTPUT_DATASET}.shp"));
    {
        let mut writer = shapefile::Writer::from_path_with_info(&dataset_path, table_info)
            .with_write_context(driver.short_name, &dataset_path)?;
        for (square, record) in squares.iter().zip(&records) {
            let points = square
                .exterior()
                .coords()
                .map(|c| shapefile::Point::new(c.x, c.y))
                .collect();
            // ESRI outer rings are clockwise; the writer reorders points as needed
            let polygon = shapefile::Polygon::new(PolygonRing::Outer(points));
            writer
                .write_shape_and_record(&polygon, record)
                .with_write_context(driver.short_name, &dataset_path)?;
        }
        // dataset handles released here
    }

    let prj_path = output_dir.join(format!("{OUTPUT_DATASET}.prj"));
    fs::write(&prj_path, srs.wkt).with_write_context(driver.short_name, &prj_path)?;

    info!(
        "Wrote {} square buffer feature(s) to {}",
        records.len(),
        dataset_path.display()
    );
    Ok(())
}

/// Collects information about a dataset: geometry type, feature count,
/// attribute schema, and the coordinate reference system named by the `.prj`
/// sidecar when one is present.
///
/// # Errors
///
/// Returns an error if the driver does not support info, or if the dataset
/// is missing or unreadable.
pub fn info(input: &str, driver: &Driver) -> Result<DatasetInfo> {
    require_capability(driver, "info", driver.capabilities.info)?;

    let input_path = resolve_dataset_path(input);
    if !input_path.exists() {
        return Err(IoError::FileNotFound { path: input_path }.into());
    }

    let mut reader = shapefile::Reader::from_path(&input_path)
        .with_read_context(driver.short_name, &input_path)?;
    let geometry_type = format!("{:?}", reader.header().shape_type);
    let feature_count = reader.iter_shapes_and_records().count();

    // Field schema comes from the sidecar dBase table. The on-disk deletion
    // flag is not a field and never shows up here.
    let dbf_path = input_path.with_extension("dbf");
    let dbf_reader =
        dbase::Reader::from_path(&dbf_path).with_read_context(driver.short_name, &dbf_path)?;
    let fields = dbf_reader
        .fields()
        .iter()
        .map(|f| FieldInfo {
            name: f.name().to_string(),
            data_type: f.field_type().format(),
        })
        .collect();

    Ok(DatasetInfo {
        dataset: input_path.display().to_string(),
        driver: driver.short_name.to_string(),
        driver_long_name: driver.long_name.to_string(),
        geometry_type,
        crs: read_prj_name(&input_path),
        feature_count,
        fields,
    })
}

fn require_capability(driver: &Driver, operation: &str, status: SupportStatus) -> Result<()> {
    if status.is_supported() {
        Ok(())
    } else {
        Err(DriverError::OperationNotSupported {
            driver: driver.short_name.to_string(),
            operation: operation.to_string(),
        }
        .into())
    }
}

/// Appends the `.shp` extension to bare dataset names, leaving explicit
/// paths untouched.
fn resolve_dataset_path(input: &str) -> PathBuf {
    let path = PathBuf::from(input);
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("shp")
    }
}

/// Extracts the 2D coordinates of a point feature.
///
/// Z and M components are dropped; only the first two coordinate components
/// are used. Anything other than a single point is refused.
fn point_coordinates(shape: &Shape, index: usize) -> Result<Point<f64>> {
    match shape {
        Shape::Point(p) => Ok(Point::new(p.x, p.y)),
        Shape::PointM(p) => Ok(Point::new(p.x, p.y)),
        Shape::PointZ(p) => Ok(Point::new(p.x, p.y)),
        Shape::NullShape => Err(FormatError::InvalidGeometry {
            format: "ESRI Shapefile".to_string(),
            message: "null geometry where a point was expected".to_string(),
            feature_id: Some(index.to_string()),
        }
        .into()),
        other => Err(FormatError::UnsupportedGeometryType {
            geometry_type: format!("{:?}", other.shapetype()),
            feature_id: Some(index.to_string()),
        }
        .into()),
    }
}

/// Deletes any pre-existing output folder and recreates it empty.
///
/// Destructive and unconditional: whatever lives under `dir` is gone after
/// this returns. Two concurrent runs race on this step.
fn replace_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        warn!("Removing existing output folder {}", dir.display());
        fs::remove_dir_all(dir).map_err(|source| IoError::ReplaceOutputFolder {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::create_dir_all(dir).map_err(|source| IoError::ReplaceOutputFolder {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Returns the name of the reference system declared by the `.prj` sidecar,
/// i.e. the first quoted token of its WKT.
fn read_prj_name(dataset_path: &Path) -> Option<String> {
    let wkt = fs::read_to_string(dataset_path.with_extension("prj")).ok()?;
    let start = wkt.find('"')? + 1;
    let end = wkt[start..].find('"')? + start;
    Some(wkt[start..end].to_string())
}
