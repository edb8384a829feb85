// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`entity`]: Content entity types ([`Entity`](entity::Entity),
//!   [`EntityKind`](entity::EntityKind), [`Field`](entity::Field),
//!   [`FieldDefinition`](entity::FieldDefinition))
//! - [`binding`]: Extraction bindings ([`FieldBinding`](binding::FieldBinding),
//!   [`MetadataSelector`](binding::MetadataSelector),
//!   [`ImageDescriptor`](binding::ImageDescriptor))
//! - [`geo`]: Well-Known Text point formatting

pub mod binding;
pub mod entity;
pub mod geo;
