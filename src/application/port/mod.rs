// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters
//! implement. These traits use only domain types, ensuring the application
//! layer remains independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`metadata`]: EXIF tag reading from a local file path
//! - [`storage`]: Stream-wrapper scheme resolution and byte access
//! - [`display`]: Default form-display lookup per entity bundle
//!
//! # Design Notes
//!
//! - All traits use domain types only (no EXIF library types, no host
//!   framework handles)
//! - Traits are `Send + Sync` so hosts may share adapters across threads
//! - Methods return `Result` with port-level error types

pub mod display;
pub mod metadata;
pub mod storage;

// Re-export main types for convenience
pub use display::{FormDisplay, FormDisplayComponent, FormDisplayProvider};
pub use metadata::{MetadataError, MetadataReader, MetadataTags};
pub use storage::{StorageError, StreamWrapperRegistry};
