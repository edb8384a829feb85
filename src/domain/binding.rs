// SPDX-License-Identifier: MPL-2.0
//! Extraction binding value objects.
//!
//! A [`FieldBinding`] ties one geolocation field to the image field it is
//! computed from. Bindings are resolved per entity at extraction time from
//! form-display configuration and live only for the duration of one
//! extraction pass; they are never persisted.

/// Selects one metadata value by section and tag, e.g. (`gps`, `gpslatitude`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataSelector {
    pub section: String,
    pub tag: String,
}

impl MetadataSelector {
    #[must_use]
    pub fn new(section: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            tag: tag.into(),
        }
    }
}

/// Binding of a geolocation field to its source image field.
///
/// The selector points at the GPS latitude tag; longitude is implicitly
/// paired through the fixed GPS section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    /// Name of the geolocation field receiving the point value.
    pub geo_field: String,

    /// Name of the image field the value is computed from.
    pub image_field: String,

    /// Which metadata value anchors the extraction.
    pub selector: MetadataSelector,

    /// Language of the source image, filled in once its descriptor has
    /// been fetched.
    pub resolved_language: Option<String>,
}

impl FieldBinding {
    #[must_use]
    pub fn new(
        geo_field: impl Into<String>,
        image_field: impl Into<String>,
        selector: MetadataSelector,
    ) -> Self {
        Self {
            geo_field: geo_field.into(),
            image_field: image_field.into(),
            selector,
            resolved_language: None,
        }
    }
}

/// One image value within an image field: its storage URI and language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub uri: String,
    pub language: String,
}

impl ImageDescriptor {
    #[must_use]
    pub fn new(uri: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            language: language.into(),
        }
    }
}
