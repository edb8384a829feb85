// SPDX-License-Identifier: MPL-2.0
//! Metadata reading port definition.
//!
//! The metadata reader is an external collaborator treated as a pure
//! function over file contents: given a local path, it returns a mapping
//! of metadata section → tag → value. GPS values live under the [`GPS`]
//! section as [`GPS_LATITUDE`] / [`GPS_LONGITUDE`].

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Section name holding GPS tags.
pub const GPS: &str = "gps";

/// Latitude tag within the GPS section.
pub const GPS_LATITUDE: &str = "gpslatitude";

/// Longitude tag within the GPS section.
pub const GPS_LONGITUDE: &str = "gpslongitude";

/// Tag name → value mapping within one section.
pub type TagValues = BTreeMap<String, String>;

/// Section name → tags mapping for one file.
///
/// May be empty when extraction failed non-fatally (e.g. the file carries
/// no metadata container at all).
pub type MetadataTags = BTreeMap<String, TagValues>;

// =============================================================================
// MetadataError
// =============================================================================

/// Errors that can occur while reading metadata from a file.
#[derive(Debug, Clone)]
pub enum MetadataError {
    /// The metadata in the file could not be parsed.
    ReadFailed(String),

    /// The file could not be accessed.
    Io(String),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::ReadFailed(msg) => write!(f, "Failed to read metadata: {msg}"),
            MetadataError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for MetadataError {}

// =============================================================================
// MetadataReader Trait
// =============================================================================

/// Port for reading metadata tags from a local file.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`.
///
/// # Example
///
/// ```ignore
/// use exif_geofield::application::port::metadata::{MetadataReader, GPS, GPS_LATITUDE};
/// use std::path::Path;
///
/// fn show_latitude(reader: &impl MetadataReader, path: &Path) {
///     if let Ok(tags) = reader.read_tags(path) {
///         if let Some(lat) = tags.get(GPS).and_then(|gps| gps.get(GPS_LATITUDE)) {
///             println!("Latitude: {lat}");
///         }
///     }
/// }
/// ```
pub trait MetadataReader: Send + Sync {
    /// Reads all metadata tags from a local file, grouped by section.
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if the file cannot be accessed or its
    /// metadata cannot be parsed.
    fn read_tags(&self, path: &Path) -> Result<MetadataTags, MetadataError>;
}
