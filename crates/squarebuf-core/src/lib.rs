//! `squarebuf-core` is the core library for the `squarebuf` project, providing the
//! square point-buffer pipeline for shapefile datasets.
//!
//! This crate includes:
//! - **Buffer Computation**: Construction of axis-aligned square polygons centered on points.
//! - **Driver Registry**: A static registry of vector data formats and their capabilities.
//! - **Pipeline Operations**: The batch read → buffer → write operation and dataset inspection.
//! - **Spatial References**: The fixed output reference system and its `.prj` representation.
//!
//! The `operations` module exposes the pipeline consumed by the CLI; `buffer` holds the
//! geometry computation it is built on.

pub mod buffer;
pub mod drivers;
pub mod error;
pub mod operations;
pub mod srs;
pub mod types;
pub mod utils;

pub use error::{Result, SquarebufError};
