//! Data types for the buffer pipeline.
//!
//! This module defines the data structures used to represent dataset
//! information and field schemas.

/// Information about a dataset.
#[derive(Debug, Clone)]
pub struct DatasetInfo {
    /// Path to the dataset
    pub dataset: String,
    /// Driver name
    pub driver: String,
    /// Driver long name
    pub driver_long_name: String,
    /// Geometry type of the layer
    pub geometry_type: String,
    /// Name of the coordinate reference system, if a `.prj` sidecar is present
    pub crs: Option<String>,
    /// Number of features in the layer
    pub feature_count: usize,
    /// Schema fields
    pub fields: Vec<FieldInfo>,
}

/// Information about a field/column.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    /// Field name
    pub name: String,
    /// Data type
    pub data_type: String,
}
