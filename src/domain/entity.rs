// SPDX-License-Identifier: MPL-2.0
//! Content entity domain types.
//!
//! An [`Entity`] is an opaque content record owned by the surrounding
//! content-management system: a type tag, a bundle (subtype) name, and a
//! mapping from field name to field values. This crate only reads entities
//! and mutates specific field values; it never creates or destroys them.

use std::collections::BTreeMap;

// =============================================================================
// EntityKind
// =============================================================================

/// The type tag of a content entity.
///
/// Image lookup only knows how to handle the first four kinds; anything
/// else yields no image fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    /// Regular content node (article, page, ...).
    Node,

    /// Media library entry.
    Media,

    /// A bare file entity. The entity itself is the image.
    File,

    /// An image inside a photo album.
    PhotoAlbumImage,

    /// Any other entity type; never carries image fields for extraction.
    Other(String),
}

impl EntityKind {
    /// Returns `true` for entity kinds whose image fields are discoverable
    /// through field definitions (as opposed to the entity being a file
    /// itself).
    #[must_use]
    pub fn has_image_fields(&self) -> bool {
        matches!(
            self,
            EntityKind::Node | EntityKind::Media | EntityKind::PhotoAlbumImage
        )
    }
}

// =============================================================================
// Field definitions and values
// =============================================================================

/// The declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Image attachment field.
    Image,

    /// Generic file attachment field.
    File,

    /// Geometric/geographic data stored as text (here: a WKT point).
    Geofield,

    /// Plain text field.
    Text,
}

/// Definition of a single field on an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    name: String,
    kind: FieldKind,
    /// Whether this is a configurable (per-bundle) field, as opposed to a
    /// built-in base field. Only configurable fields (and the base `title`
    /// field) can carry a geolocation widget binding.
    configurable: bool,
}

impl FieldDefinition {
    /// Creates a configurable field definition.
    #[must_use]
    pub fn configurable(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            configurable: true,
        }
    }

    /// Creates a built-in base field definition.
    #[must_use]
    pub fn base(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            configurable: false,
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared field kind.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns `true` for configurable (per-bundle) fields.
    #[must_use]
    pub fn is_configurable(&self) -> bool {
        self.configurable
    }

    /// Returns `true` when the field holds image or file attachments.
    #[must_use]
    pub fn is_attachment(&self) -> bool {
        matches!(self.kind, FieldKind::Image | FieldKind::File)
    }
}

/// Reference to a stored file: its storage URI plus the language of the
/// entity it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    pub uri: String,
    pub language: String,
}

impl FileReference {
    #[must_use]
    pub fn new(uri: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            language: language.into(),
        }
    }
}

/// A single value slot within a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Textual value (geofields store their WKT string this way).
    Text(String),

    /// File attachment value.
    File(FileReference),
}

/// A field instance on an entity: its definition plus zero or more values.
///
/// Image and file fields may be multi-valued; descriptor order follows
/// value order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    definition: FieldDefinition,
    values: Vec<FieldValue>,
}

impl Field {
    /// Creates a field with no values.
    #[must_use]
    pub fn new(definition: FieldDefinition) -> Self {
        Self {
            definition,
            values: Vec::new(),
        }
    }

    /// Creates a field with the given values.
    #[must_use]
    pub fn with_values(definition: FieldDefinition, values: Vec<FieldValue>) -> Self {
        Self { definition, values }
    }

    #[must_use]
    pub fn definition(&self) -> &FieldDefinition {
        &self.definition
    }

    #[must_use]
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn first_value(&self) -> Option<&FieldValue> {
        self.values.first()
    }

    /// Sets the first value slot, replacing an existing value or creating
    /// the slot when the field is empty. Further values are untouched.
    pub fn set_first_value(&mut self, value: FieldValue) {
        if self.values.is_empty() {
            self.values.push(value);
        } else {
            self.values[0] = value;
        }
    }

    /// Returns the file references held by this field, in value order.
    #[must_use]
    pub fn file_references(&self) -> Vec<&FileReference> {
        self.values
            .iter()
            .filter_map(|v| match v {
                FieldValue::File(reference) => Some(reference),
                FieldValue::Text(_) => None,
            })
            .collect()
    }
}

// =============================================================================
// Entity
// =============================================================================

/// An opaque content record: type tag, bundle name, and named fields.
///
/// File entities additionally carry their own [`FileReference`], since a
/// file entity IS the image rather than holding one in a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    kind: EntityKind,
    bundle: String,
    file: Option<FileReference>,
    fields: BTreeMap<String, Field>,
}

impl Entity {
    /// Creates an entity with no fields.
    #[must_use]
    pub fn new(kind: EntityKind, bundle: impl Into<String>) -> Self {
        Self {
            kind,
            bundle: bundle.into(),
            file: None,
            fields: BTreeMap::new(),
        }
    }

    /// Creates a file entity wrapping its own stored file.
    #[must_use]
    pub fn file(bundle: impl Into<String>, file: FileReference) -> Self {
        Self {
            kind: EntityKind::File,
            bundle: bundle.into(),
            file: Some(file),
            fields: BTreeMap::new(),
        }
    }

    /// Adds a field, builder style.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.insert_field(field);
        self
    }

    /// Adds or replaces a field.
    pub fn insert_field(&mut self, field: Field) {
        self.fields
            .insert(field.definition().name().to_string(), field);
    }

    #[must_use]
    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    #[must_use]
    pub fn bundle(&self) -> &str {
        &self.bundle
    }

    /// The entity's own file, for file entities.
    #[must_use]
    pub fn file_reference(&self) -> Option<&FileReference> {
        self.file.as_ref()
    }

    /// Returns the named field, if present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Returns the named field mutably, if present.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.get_mut(name)
    }

    /// Iterates over all fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }
}

// =============================================================================
// Tests
// =============================================================================
