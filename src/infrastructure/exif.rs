// SPDX-License-Identifier: MPL-2.0
//! EXIF metadata reading via kamadak-exif.
//!
//! Implements the [`MetadataReader`] port. GPS coordinates are converted
//! from the EXIF degrees/minutes/seconds rationals to signed decimal
//! degrees and surfaced as strings under the `gps` section; a handful of
//! common camera tags land under `exif`.

use crate::application::port::metadata::{
    MetadataError, MetadataReader, MetadataTags, TagValues, GPS, GPS_LATITUDE, GPS_LONGITUDE,
};
use exif::{In, Tag};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Section holding general camera tags.
const EXIF_SECTION: &str = "exif";

/// [`MetadataReader`] adapter backed by the kamadak-exif parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifMetadataReader;

impl ExifMetadataReader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetadataReader for ExifMetadataReader {
    /// Reads tags from a local file.
    ///
    /// A file without any EXIF container yields an empty map rather than
    /// an error, so callers treat "no metadata" as a non-fatal outcome.
    fn read_tags(&self, path: &Path) -> Result<MetadataTags, MetadataError> {
        let file = File::open(path).map_err(|e| MetadataError::Io(e.to_string()))?;
        let mut reader = BufReader::new(file);

        let parsed = match exif::Reader::new().read_from_container(&mut reader) {
            Ok(parsed) => parsed,
            Err(exif::Error::NotFound(_)) => return Ok(MetadataTags::new()),
            Err(e) => return Err(MetadataError::ReadFailed(e.to_string())),
        };

        let mut tags = MetadataTags::new();

        let mut gps = TagValues::new();
        if let Some(latitude) = read_coordinate(&parsed, Tag::GPSLatitude, Tag::GPSLatitudeRef, 'S')
        {
            gps.insert(GPS_LATITUDE.to_string(), latitude.to_string());
        }
        if let Some(longitude) =
            read_coordinate(&parsed, Tag::GPSLongitude, Tag::GPSLongitudeRef, 'W')
        {
            gps.insert(GPS_LONGITUDE.to_string(), longitude.to_string());
        }
        if !gps.is_empty() {
            tags.insert(GPS.to_string(), gps);
        }

        let mut general = TagValues::new();
        for (key, tag) in [
            ("make", Tag::Make),
            ("model", Tag::Model),
            ("datetimeoriginal", Tag::DateTimeOriginal),
        ] {
            if let Some(field) = parsed.get_field(tag, In::PRIMARY) {
                general.insert(
                    key.to_string(),
                    field
                        .display_value()
                        .to_string()
                        .trim_matches('"')
                        .to_string(),
                );
            }
        }
        if !general.is_empty() {
            tags.insert(EXIF_SECTION.to_string(), general);
        }

        Ok(tags)
    }
}

/// Reads one GPS coordinate as signed decimal degrees. The sign comes
/// from the hemisphere reference tag (`negative_ref` is 'S' or 'W').
fn read_coordinate(
    parsed: &exif::Exif,
    value_tag: Tag,
    ref_tag: Tag,
    negative_ref: char,
) -> Option<f64> {
    let value_field = parsed.get_field(value_tag, In::PRIMARY)?;
    let ref_field = parsed.get_field(ref_tag, In::PRIMARY)?;
    let degrees = parse_dms(&value_field.value)?;
    let reference = ref_field.display_value().to_string();
    Some(if reference.contains(negative_ref) {
        -degrees
    } else {
        degrees
    })
}

/// Converts EXIF degrees/minutes/seconds rationals to decimal degrees.
fn parse_dms(value: &exif::Value) -> Option<f64> {
    match value {
        exif::Value::Rational(rationals) if rationals.len() >= 3 => {
            let degrees = rationals[0].to_f64();
            let minutes = rationals[1].to_f64();
            let seconds = rationals[2].to_f64();
            Some(degrees + minutes / 60.0 + seconds / 3600.0)
        }
        _ => None,
    }
}
