// SPDX-License-Identifier: MPL-2.0
//! Well-Known Text point formatting.

/// Formats a WKT point literal from raw coordinate strings.
///
/// Coordinate values are passed through exactly as the metadata reader
/// returned them; no unit conversion and no validation happens here. A
/// missing tag therefore produces an empty coordinate slot.
///
/// Format: `POINT(<longitude> <latitude>)` (WKT axis order).
#[must_use]
pub fn point_wkt(longitude: &str, latitude: &str) -> String {
    format!("POINT({longitude} {latitude})")
}
