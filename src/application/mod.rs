// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`binding`]: Resolves geolocation field bindings from form displays
//! - [`image_fields`]: Locates image/file fields on an entity
//! - [`staging`]: Materializes local paths for stored files
//! - [`extraction`]: Top-level extraction orchestrator
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The host system drives [`extraction::GeoExtractionOrchestrator`]
//!   from its entity lifecycle

pub mod binding;
pub mod extraction;
pub mod image_fields;
pub mod port;
pub mod staging;

// Re-export main types for convenience
pub use binding::GeoFieldBindingResolver;
pub use extraction::GeoExtractionOrchestrator;
pub use image_fields::{ImageFieldLocator, ImageSource};
pub use staging::LocalFileResolver;
