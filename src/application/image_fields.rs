// SPDX-License-Identifier: MPL-2.0
//! Image field discovery on content entities.

use crate::domain::binding::ImageDescriptor;
use crate::domain::entity::{Entity, EntityKind, FieldDefinition, FieldValue};
use std::collections::BTreeMap;

/// Synthetic field name used for file entities, which are their own image.
pub const FILE_ENTITY_FIELD: &str = "file";

/// Where an image field's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A regular image/file attachment field on the entity.
    Field(FieldDefinition),

    /// The entity's own stored file (file entities only).
    EntityFile,
}

/// Locates the fields of an entity that hold image/file attachments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFieldLocator;

impl ImageFieldLocator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the image fields of an entity, keyed by field name.
    ///
    /// Node, media and photo-album-image entities contribute every field
    /// whose declared kind is image or file. File entities contribute a
    /// single synthetic [`FILE_ENTITY_FIELD`] entry pointing at the entity
    /// itself. Any other entity kind yields an empty map.
    #[must_use]
    pub fn list_image_fields(&self, entity: &Entity) -> BTreeMap<String, ImageSource> {
        let mut result = BTreeMap::new();
        if entity.kind().has_image_fields() {
            for field in entity.fields() {
                let definition = field.definition();
                if definition.is_attachment() {
                    result.insert(
                        definition.name().to_string(),
                        ImageSource::Field(definition.clone()),
                    );
                }
            }
        } else if entity.kind() == &EntityKind::File {
            result.insert(FILE_ENTITY_FIELD.to_string(), ImageSource::EntityFile);
        }
        result
    }

    /// Returns one descriptor per image value of the named field, in
    /// field order. File entities yield a single descriptor for their own
    /// file; unknown fields or entity kinds yield an empty list.
    #[must_use]
    pub fn image_descriptors(&self, entity: &Entity, field_name: &str) -> Vec<ImageDescriptor> {
        if entity.kind().has_image_fields() {
            let Some(field) = entity.field(field_name) else {
                return Vec::new();
            };
            field
                .values()
                .iter()
                .filter_map(|value| match value {
                    FieldValue::File(reference) => {
                        Some(ImageDescriptor::new(&reference.uri, &reference.language))
                    }
                    FieldValue::Text(_) => None,
                })
                .collect()
        } else if entity.kind() == &EntityKind::File {
            entity
                .file_reference()
                .map(|reference| vec![ImageDescriptor::new(&reference.uri, &reference.language)])
                .unwrap_or_default()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::{Field, FieldKind, FileReference};

    fn node_with_attachments() -> Entity {
        Entity::new(EntityKind::Node, "article")
            .with_field(Field::with_values(
                FieldDefinition::configurable("field_photo", FieldKind::Image),
                vec![
                    FieldValue::File(FileReference::new("public://a.jpg", "en")),
                    FieldValue::File(FileReference::new("public://b.jpg", "en")),
                ],
            ))
            .with_field(Field::with_values(
                FieldDefinition::configurable("field_attachment", FieldKind::File),
                vec![FieldValue::File(FileReference::new("public://doc.pdf", "en"))],
            ))
            .with_field(Field::new(FieldDefinition::configurable(
                "field_location",
                FieldKind::Geofield,
            )))
    }

    #[test]
    fn node_lists_image_and_file_fields() {
        let locator = ImageFieldLocator::new();
        let fields = locator.list_image_fields(&node_with_attachments());
        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key("field_photo"));
        assert!(fields.contains_key("field_attachment"));
        assert!(!fields.contains_key("field_location"));
    }

    #[test]
    fn file_entity_yields_synthetic_entry() {
        let locator = ImageFieldLocator::new();
        let entity = Entity::file("image", FileReference::new("public://photo.jpg", "fr"));
        let fields = locator.list_image_fields(&entity);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get(FILE_ENTITY_FIELD), Some(&ImageSource::EntityFile));

        let descriptors = locator.image_descriptors(&entity, FILE_ENTITY_FIELD);
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].uri, "public://photo.jpg");
        assert_eq!(descriptors[0].language, "fr");
    }

    #[test]
    fn other_entity_kinds_yield_nothing() {
        let locator = ImageFieldLocator::new();
        let entity = Entity::new(EntityKind::Other("taxonomy_term".to_string()), "tags");
        assert!(locator.list_image_fields(&entity).is_empty());
        assert!(locator.image_descriptors(&entity, "field_photo").is_empty());
    }

    #[test]
    fn descriptors_follow_field_order() {
        let locator = ImageFieldLocator::new();
        let descriptors = locator.image_descriptors(&node_with_attachments(), "field_photo");
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].uri, "public://a.jpg");
        assert_eq!(descriptors[1].uri, "public://b.jpg");
    }

    #[test]
    fn unknown_field_yields_no_descriptors() {
        let locator = ImageFieldLocator::new();
        assert!(locator
            .image_descriptors(&node_with_attachments(), "field_missing")
            .is_empty());
    }
}
