// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits
//! defined in `application::port`.
//!
//! # Available Adapters
//!
//! - [`exif`]: EXIF tag reading via kamadak-exif (implements
//!   [`MetadataReader`])
//! - [`storage`]: Filesystem-backed stream wrappers (implements
//!   [`StreamWrapperRegistry`])
//! - [`display`]: In-memory form-display registry (implements
//!   [`FormDisplayProvider`])
//!
//! [`MetadataReader`]: crate::application::port::MetadataReader
//! [`StreamWrapperRegistry`]: crate::application::port::StreamWrapperRegistry
//! [`FormDisplayProvider`]: crate::application::port::FormDisplayProvider

pub mod display;
pub mod exif;
pub mod storage;

// Re-export main types for convenience
pub use display::StaticFormDisplays;
pub use self::exif::ExifMetadataReader;
pub use storage::DiskStreamWrappers;
