//! Spatial reference definitions for output datasets.
//!
//! The pure-Rust shapefile writer has no coordinate-reference-system layer of
//! its own, so the reference systems this tool can stamp onto a dataset are
//! carried here as static entries: an EPSG code, a display name, and the ESRI
//! WKT written into the `.prj` sidecar.

/// EPSG code of the fixed output spatial reference (NZGD2000 / New Zealand
/// Transverse Mercator 2000).
pub const OUTPUT_EPSG: u32 = 2193;

/// A named spatial reference system.
#[derive(Debug, Clone, Copy)]
pub struct SpatialRef {
    /// EPSG code identifying the reference system.
    pub epsg: u32,
    /// Human-readable name.
    pub name: &'static str,
    /// ESRI WKT representation, as written to `.prj` sidecar files.
    pub wkt: &'static str,
}

static SPATIAL_REFS: &[SpatialRef] = &[SpatialRef {
    epsg: 2193,
    name: "NZGD2000 / New Zealand Transverse Mercator 2000",
    wkt: "PROJCS[\"NZGD_2000_New_Zealand_Transverse_Mercator\",\
GEOGCS[\"GCS_NZGD_2000\",DATUM[\"D_NZGD_2000\",\
SPHEROID[\"GRS_1980\",6378137.0,298.257222101]],\
PRIMEM[\"Greenwich\",0.0],UNIT[\"Degree\",0.0174532925199433]],\
PROJECTION[\"Transverse_Mercator\"],\
PARAMETER[\"False_Easting\",1600000.0],\
PARAMETER[\"False_Northing\",10000000.0],\
PARAMETER[\"Central_Meridian\",173.0],\
PARAMETER[\"Scale_Factor\",0.9996],\
PARAMETER[\"Latitude_Of_Origin\",0.0],\
UNIT[\"Meter\",1.0]]",
}];

/// Finds a spatial reference by EPSG code.
///
/// Returns `None` if the code is not in the table.
///
/// # Examples
///
/// ```
/// use squarebuf_core::srs;
///
/// let sr = srs::from_epsg(srs::OUTPUT_EPSG).expect("output SRS is registered");
/// assert_eq!(sr.epsg, 2193);
/// assert!(srs::from_epsg(4326).is_none());
/// ```
#[must_use]
pub fn from_epsg(code: u32) -> Option<&'static SpatialRef> {
    SPATIAL_REFS.iter().find(|sr| sr.epsg == code)
}
