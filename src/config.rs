// SPDX-License-Identifier: MPL-2.0
//! Extraction settings.
//!
//! The host configuration system owns these values; this module only
//! reads them. Each map goes from bundle name to an enabled flag, where
//! the value `"0"` is a disabled placeholder left behind by checkbox
//! forms and must be filtered out.
//!
//! # Examples
//!
//! ```no_run
//! use exif_geofield::config::{self, Settings};
//! use std::path::Path;
//!
//! let settings = config::load_from_path(Path::new("exif_geofield.toml"))
//!     .unwrap_or_default();
//! let bundles = settings.eligible_bundles();
//! assert!(!bundles.contains("0"));
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Bundle appended to the eligible set when photo-album integration is on.
pub const PHOTO_ALBUM_BUNDLE: &str = "photos_image";

/// Disabled-placeholder flag value.
const DISABLED: &str = "0";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Watched node bundles, bundle name → enabled flag.
    #[serde(default)]
    pub nodetypes: BTreeMap<String, String>,

    /// Watched media bundles.
    #[serde(default)]
    pub mediatypes: BTreeMap<String, String>,

    /// Watched file bundles.
    #[serde(default)]
    pub filetypes: BTreeMap<String, String>,

    /// Whether the host runs a photo-album module; adds
    /// [`PHOTO_ALBUM_BUNDLE`] to the eligible set.
    #[serde(default)]
    pub photo_albums: bool,
}

impl Settings {
    /// Collects the bundles whose entities are watched for extraction,
    /// filtering out `"0"` placeholders.
    #[must_use]
    pub fn eligible_bundles(&self) -> BTreeSet<String> {
        let mut bundles: BTreeSet<String> = [&self.nodetypes, &self.mediatypes, &self.filetypes]
            .into_iter()
            .flatten()
            .filter(|(_, flag)| flag.as_str() != DISABLED)
            .map(|(bundle, _)| bundle.clone())
            .collect();
        if self.photo_albums {
            bundles.insert(PHOTO_ALBUM_BUNDLE.to_string());
        }
        bundles
    }
}

pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}
