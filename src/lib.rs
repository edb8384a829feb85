// SPDX-License-Identifier: MPL-2.0
//! `exif_geofield` populates geolocation fields on content entities from
//! the EXIF GPS tags of their image fields.
//!
//! When the host content-management system commits a new entity of a
//! watched bundle, the [`GeoExtractionOrchestrator`] discovers which of
//! the entity's fields hold images, which geolocation fields are bound to
//! them through form-display configuration, stages each image at a local
//! path (copying remote-scheme files into temporary storage), reads its
//! GPS tags, and writes a Well-Known Text `POINT(<lon> <lat>)` string
//! into each bound field's first value slot.
//!
//! All collaborators (metadata reading, storage access, form-display
//! lookup) are injected through the port traits in
//! [`application::port`], so hosts and tests substitute their own
//! implementations freely.
//!
//! [`GeoExtractionOrchestrator`]: application::extraction::GeoExtractionOrchestrator

#![doc(html_root_url = "https://docs.rs/exif_geofield/0.2.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
