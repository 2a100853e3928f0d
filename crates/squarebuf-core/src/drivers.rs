//! Driver registry for vector data format support and capabilities.
//!
//! This module provides a static registry of vector data format drivers, including
//! their current support status (supported, planned, or not supported) for various operations
//! (info, read, write). The registry is modeled after GDAL's driver system but covers the
//! shapefile-family neighborhood this tool works in.
//!
//! # Examples
//!
//! ```
//! use squarebuf_core::drivers::{find_driver, get_available_drivers};
//!
//! // Find a specific driver
//! let shp = find_driver("ESRI Shapefile").expect("Shapefile driver should exist");
//! assert!(shp.capabilities.read.is_supported());
//!
//! // List all drivers with supported operations
//! let available = get_available_drivers();
//! for driver in available {
//!     println!("{}: {}", driver.short_name, driver.long_name);
//! }
//! ```

/// Support status for a specific driver operation.
///
/// Indicates whether a driver operation (info, read, or write) is currently supported,
/// planned for future implementation, or not supported at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportStatus {
    /// The feature is fully supported and implemented.
    Supported,
    /// The feature is not supported by the driver.
    NotSupported,
    /// The feature is planned for future implementation.
    Planned,
}

impl SupportStatus {
    /// Returns `true` if the operation is fully supported and implemented.
    ///
    /// # Examples
    ///
    /// ```
    /// use squarebuf_core::drivers::SupportStatus;
    ///
    /// assert!(SupportStatus::Supported.is_supported());
    /// assert!(!SupportStatus::Planned.is_supported());
    /// assert!(!SupportStatus::NotSupported.is_supported());
    /// ```
    #[must_use]
    pub fn is_supported(&self) -> bool {
        matches!(self, SupportStatus::Supported)
    }

    /// Returns `true` if the operation is supported or planned (i.e., not explicitly unsupported).
    ///
    /// This is useful for filtering drivers that have current or future support.
    #[must_use]
    pub fn is_available(&self) -> bool {
        !matches!(self, SupportStatus::NotSupported)
    }

    /// Returns the string representation of this support status.
    ///
    /// # Examples
    ///
    /// ```
    /// use squarebuf_core::drivers::SupportStatus;
    ///
    /// assert_eq!(SupportStatus::Supported.as_str(), "Supported");
    /// assert_eq!(SupportStatus::Planned.as_str(), "Planned");
    /// assert_eq!(SupportStatus::NotSupported.as_str(), "Not Supported");
    /// ```
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            SupportStatus::Supported => "Supported",
            SupportStatus::NotSupported => "Not Supported",
            SupportStatus::Planned => "Planned",
        }
    }
}

/// Capabilities supported by a vector data format driver.
///
/// Each driver can support three types of operations: reading metadata (info),
/// reading data (read), and writing data (write). Each capability has an associated
/// [`SupportStatus`] indicating its current implementation status.
#[derive(Debug, Clone, Copy)]
pub struct DriverCapabilities {
    /// Support status for reading dataset metadata and information.
    pub info: SupportStatus,
    /// Support status for reading data from this format.
    pub read: SupportStatus,
    /// Support status for writing data to this format.
    pub write: SupportStatus,
}

impl DriverCapabilities {
    /// Returns `true` if at least one operation is supported or planned.
    ///
    /// # Examples
    ///
    /// ```
    /// use squarebuf_core::drivers::{DriverCapabilities, SupportStatus};
    ///
    /// let caps = DriverCapabilities {
    ///     info: SupportStatus::Planned,
    ///     read: SupportStatus::NotSupported,
    ///     write: SupportStatus::NotSupported,
    /// };
    /// assert!(caps.has_any_support());
    /// ```
    #[must_use]
    pub fn has_any_support(&self) -> bool {
        self.info.is_available() || self.read.is_available() || self.write.is_available()
    }

    /// Returns `true` if at least one operation is fully supported and implemented.
    #[must_use]
    pub fn has_supported_operation(&self) -> bool {
        self.info.is_supported() || self.read.is_supported() || self.write.is_supported()
    }
}

/// Vector data format driver definition.
///
/// A driver represents support for a specific vector data format (e.g., `ESRI Shapefile`).
/// Each driver has a short name (used for driver identification), a descriptive long name,
/// and a set of capabilities indicating what operations are supported.
///
/// # Examples
///
/// ```
/// use squarebuf_core::drivers::{Driver, SupportStatus};
///
/// let driver = Driver::new(
///     "ESRI Shapefile",
///     "ESRI Shapefile / DBF",
///     SupportStatus::Supported,
///     SupportStatus::Supported,
///     SupportStatus::Supported,
/// );
///
/// assert_eq!(driver.short_name, "ESRI Shapefile");
/// assert!(driver.capabilities.read.is_supported());
/// ```
#[derive(Debug, Clone)]
pub struct Driver {
    /// Short name used for driver identification (e.g., `"ESRI Shapefile"`).
    pub short_name: &'static str,
    /// Long descriptive name for display purposes (e.g., `"ESRI Shapefile / DBF"`).
    pub long_name: &'static str,
    /// Operations supported by this driver (info, read, write).
    pub capabilities: DriverCapabilities,
}

impl Driver {
    /// Creates a new driver definition with specified capabilities.
    #[must_use]
    pub const fn new(
        short_name: &'static str,
        long_name: &'static str,
        info: SupportStatus,
        read: SupportStatus,
        write: SupportStatus,
    ) -> Self {
        Self {
            short_name,
            long_name,
            capabilities: DriverCapabilities { info, read, write },
        }
    }
}

/// Returns the complete registry of all known vector format drivers.
///
/// This function returns every driver in the registry, regardless of support status.
/// Each driver includes its short name, long name, and capabilities for info, read,
/// and write operations.
///
/// # Examples
///
/// ```
/// use squarebuf_core::drivers::get_drivers;
///
/// let all_drivers = get_drivers();
///
/// // Find drivers with specific characteristics
/// let read_capable = all_drivers.iter()
///     .filter(|d| d.capabilities.read.is_supported())
///     .count();
/// assert_eq!(read_capable, 1);
/// ```
#[must_use]
pub fn get_drivers() -> Vec<Driver> {
    use SupportStatus::{NotSupported, Planned, Supported};

    vec![
        // The one format the pipeline reads and writes
        Driver::new(
            "ESRI Shapefile",
            "ESRI Shapefile / DBF",
            Supported,
            Supported,
            Supported,
        ),
        // Neighboring vector formats
        Driver::new("GeoJSON", "GeoJSON", Planned, Planned, Planned),
        Driver::new(
            "GeoJSONSeq",
            "GeoJSONSeq: sequence of GeoJSON features",
            Planned,
            Planned,
            Planned,
        ),
        Driver::new("GPKG", "GeoPackage vector", Planned, Planned, Planned),
        Driver::new("FlatGeobuf", "FlatGeobuf", Planned, Planned, Planned),
        Driver::new(
            "CSV",
            "Comma Separated Value (.csv)",
            Planned,
            Planned,
            Planned,
        ),
        Driver::new(
            "GML",
            "Geography Markup Language",
            NotSupported,
            NotSupported,
            NotSupported,
        ),
        Driver::new(
            "KML",
            "Keyhole Markup Language",
            NotSupported,
            NotSupported,
            NotSupported,
        ),
        Driver::new(
            "MapInfo File",
            "MapInfo TAB and MIF/MID",
            NotSupported,
            NotSupported,
            NotSupported,
        ),
        Driver::new(
            "OpenFileGDB",
            "ESRI File Geodatabase vector (OpenFileGDB)",
            NotSupported,
            NotSupported,
            NotSupported,
        ),
    ]
}

/// Returns all drivers that have at least one fully supported operation.
///
/// This filters the driver registry to include only drivers where at least one
/// operation (info, read, or write) has [`SupportStatus::Supported`]. Drivers with
/// only planned or unsupported operations are excluded.
#[must_use]
pub fn get_available_drivers() -> Vec<Driver> {
    get_drivers()
        .into_iter()
        .filter(|d| d.capabilities.has_supported_operation())
        .collect()
}

/// Finds a driver by its short name (case-insensitive).
///
/// Returns `None` if no driver with the given name exists in the registry.
///
/// # Examples
///
/// ```
/// use squarebuf_core::drivers::find_driver;
///
/// // Case-insensitive lookup
/// let driver = find_driver("esri shapefile").expect("Shapefile should exist");
/// assert_eq!(driver.short_name, "ESRI Shapefile");
///
/// // Non-existent driver
/// assert!(find_driver("InvalidDriver").is_none());
/// ```
#[must_use]
pub fn find_driver(name: &str) -> Option<Driver> {
    get_drivers()
        .into_iter()
        .find(|d| d.short_name.eq_ignore_ascii_case(name))
}

/// Lists all drivers that support specific capabilities.
///
/// Filters drivers based on whether they have full support ([`SupportStatus::Supported`])
/// for the requested operations. If a capability parameter is `false`, that operation
/// is not required; if `true`, the driver must support it.
///
/// # Arguments
///
/// * `read` - If `true`, only include drivers that support reading
/// * `write` - If `true`, only include drivers that support writing
/// * `info` - If `true`, only include drivers that support info operations
#[must_use]
pub fn list_drivers_with_capability(read: bool, write: bool, info: bool) -> Vec<Driver> {
    get_drivers()
        .into_iter()
        .filter(|d| {
            let read_ok = !read || d.capabilities.read.is_supported();
            let write_ok = !write || d.capabilities.write.is_supported();
            let info_ok = !info || d.capabilities.info.is_supported();
            read_ok && write_ok && info_ok
        })
        .collect()
}

/// Returns all driver short names in alphabetically sorted order.
///
/// This is useful for displaying driver options to users or for validation.
#[must_use]
pub fn get_driver_names() -> Vec<&'static str> {
    let mut names: Vec<_> = get_drivers().iter().map(|d| d.short_name).collect();
    names.sort_unstable();
    names
}
