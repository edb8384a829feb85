// SPDX-License-Identifier: MPL-2.0
//! Top-level extraction orchestration.
//!
//! The orchestrator is driven by the host system's entity lifecycle: when
//! a new entity of a watched bundle is committed, it resolves geolocation
//! field bindings, stages each bound image locally, reads its GPS tags,
//! and writes a WKT point into every bound field.

use crate::application::binding::GeoFieldBindingResolver;
use crate::application::image_fields::ImageFieldLocator;
use crate::application::port::display::FormDisplayProvider;
use crate::application::port::metadata::{MetadataReader, MetadataTags, GPS_LONGITUDE};
use crate::application::port::storage::StreamWrapperRegistry;
use crate::application::staging::LocalFileResolver;
use crate::config::Settings;
use crate::domain::entity::{Entity, FieldValue};
use crate::domain::geo::point_wkt;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Coordinates the extraction pipeline for one host system.
///
/// All collaborators are injected at construction so hosts and tests can
/// substitute their own implementations. The staging cache inside lives
/// for the lifetime of the orchestrator.
pub struct GeoExtractionOrchestrator {
    eligible_bundles: BTreeSet<String>,
    bindings: GeoFieldBindingResolver,
    images: ImageFieldLocator,
    files: LocalFileResolver,
    reader: Arc<dyn MetadataReader>,
}

impl GeoExtractionOrchestrator {
    #[must_use]
    pub fn new(
        settings: &Settings,
        displays: Arc<dyn FormDisplayProvider>,
        wrappers: Arc<dyn StreamWrapperRegistry>,
        reader: Arc<dyn MetadataReader>,
    ) -> Self {
        Self {
            eligible_bundles: settings.eligible_bundles(),
            bindings: GeoFieldBindingResolver::new(displays),
            images: ImageFieldLocator::new(),
            files: LocalFileResolver::new(wrappers),
            reader,
        }
    }

    /// Populates the entity's bound geolocation fields from its images'
    /// GPS tags. Invoked by the host after a new entity is committed.
    ///
    /// No-op when the bundle is not eligible, when no bindings resolve,
    /// or when the entity has no image fields. A failure on one image
    /// field (staging or metadata read) leaves its bound fields unset and
    /// never aborts the remaining bindings.
    ///
    /// Only the first image value of a multi-valued field feeds
    /// extraction, and each distinct image field is read once no matter
    /// how many geolocation fields it backs.
    pub fn on_entity_created(&mut self, entity_type: &str, entity: &mut Entity) {
        if !self.eligible_bundles.contains(entity.bundle()) {
            return;
        }

        let mut bindings = self.bindings.resolve_bindings(entity_type, entity);
        if bindings.is_empty() {
            return;
        }

        let image_fields = self.images.list_image_fields(entity);
        if image_fields.is_empty() {
            return;
        }

        // One metadata read per distinct bound image field.
        let mut per_image: BTreeMap<String, (MetadataTags, Option<String>)> = BTreeMap::new();
        for image_field in image_fields.keys() {
            if !bindings.values().any(|b| &b.image_field == image_field) {
                continue;
            }
            let descriptors = self.images.image_descriptors(entity, image_field);
            let Some(first) = descriptors.first() else {
                continue;
            };
            // The resolver already logged any staging failure with the URI.
            let Ok(path) = self.files.resolve_local_path(&first.uri) else {
                continue;
            };
            match self.reader.read_tags(&path) {
                Ok(tags) => {
                    per_image
                        .insert(image_field.clone(), (tags, Some(first.language.clone())));
                }
                Err(err) => {
                    tracing::warn!(
                        uri = %first.uri,
                        error = %err,
                        "skipping image field, metadata extraction failed"
                    );
                }
            }
        }

        for binding in bindings.values_mut() {
            let Some((tags, language)) = per_image.get(&binding.image_field) else {
                continue;
            };
            binding.resolved_language = language.clone();

            let section = tags.get(&binding.selector.section);
            let latitude = section
                .and_then(|s| s.get(&binding.selector.tag))
                .map_or("", String::as_str);
            let longitude = section
                .and_then(|s| s.get(GPS_LONGITUDE))
                .map_or("", String::as_str);
            if latitude.is_empty() || longitude.is_empty() {
                tracing::debug!(
                    field = %binding.geo_field,
                    "gps tags missing, writing empty coordinates"
                );
            }

            let value = point_wkt(longitude, latitude);
            if let Some(field) = entity.field_mut(&binding.geo_field) {
                field.set_first_value(FieldValue::Text(value));
            }
        }
    }

    /// Entity-update hook: intentionally does nothing.
    ///
    /// Extraction runs only on initial creation so user-corrected
    /// locations are never overwritten. Known limitation: replacing an
    /// image later does not re-trigger extraction.
    pub fn on_entity_updated(&mut self, _entity_type: &str, _entity: &mut Entity) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::binding::{GEOFIELD_WIDGET, IMAGE_FIELD_SETTING};
    use crate::application::port::display::{FormDisplay, FormDisplayComponent};
    use crate::application::port::metadata::{MetadataError, GPS, GPS_LATITUDE};
    use crate::application::port::storage::{target_of, StorageError};
    use crate::domain::entity::{
        EntityKind, Field, FieldDefinition, FieldKind, FileReference,
    };
    use std::io::Read;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    struct StubDisplays(FormDisplay);

    impl FormDisplayProvider for StubDisplays {
        fn default_display(&self, _entity_type: &str, _bundle: &str) -> Option<FormDisplay> {
            Some(self.0.clone())
        }
    }

    /// Registry where `public://` is local (backed by a temp dir) and
    /// `bucket://` is remote; `bucket://broken/...` fails to open.
    struct StubRegistry {
        temp: TempDir,
        root: TempDir,
    }

    impl StubRegistry {
        fn new() -> Self {
            Self {
                temp: TempDir::new().expect("temp"),
                root: TempDir::new().expect("root"),
            }
        }

        fn add_local_file(&self, name: &str) {
            std::fs::write(self.root.path().join(name), b"jpeg").expect("write");
        }
    }

    impl StreamWrapperRegistry for StubRegistry {
        fn is_local_scheme(&self, scheme: Option<&str>) -> bool {
            matches!(scheme, None | Some("public"))
        }

        fn local_path(&self, uri: &str) -> Result<PathBuf, StorageError> {
            self.root
                .path()
                .join(target_of(uri))
                .canonicalize()
                .map_err(|e| StorageError::Io(e.to_string()))
        }

        fn open(&self, uri: &str) -> Result<Box<dyn Read>, StorageError> {
            if uri.starts_with("bucket://broken/") {
                Err(StorageError::CopyFailed("connection reset".to_string()))
            } else {
                Ok(Box::new(std::io::Cursor::new(b"jpeg".to_vec())))
            }
        }

        fn temporary_dir(&self) -> &Path {
            self.temp.path()
        }
    }

    /// Reader stub returning fixed tags and counting invocations.
    struct StubReader {
        tags: MetadataTags,
        calls: Arc<AtomicUsize>,
    }

    impl StubReader {
        fn with_gps(lat: &str, lon: &str) -> (Self, Arc<AtomicUsize>) {
            let mut gps = std::collections::BTreeMap::new();
            gps.insert(GPS_LATITUDE.to_string(), lat.to_string());
            gps.insert(GPS_LONGITUDE.to_string(), lon.to_string());
            let mut tags = MetadataTags::new();
            tags.insert(GPS.to_string(), gps);
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    tags,
                    calls: calls.clone(),
                },
                calls,
            )
        }

        fn empty() -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    tags: MetadataTags::new(),
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    impl MetadataReader for StubReader {
        fn read_tags(&self, _path: &Path) -> Result<MetadataTags, MetadataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.tags.clone())
        }
    }

    fn settings_for(bundle: &str) -> Settings {
        let mut settings = Settings::default();
        settings
            .nodetypes
            .insert(bundle.to_string(), bundle.to_string());
        settings
    }

    fn geofield_display(pairs: &[(&str, &str)]) -> FormDisplay {
        let mut display = FormDisplay::new();
        for (geo, image) in pairs {
            display = display.with_component(
                *geo,
                FormDisplayComponent::new(GEOFIELD_WIDGET).with_setting(IMAGE_FIELD_SETTING, *image),
            );
        }
        display
    }

    fn article(image_uris: &[&str]) -> Entity {
        Entity::new(EntityKind::Node, "article")
            .with_field(Field::with_values(
                FieldDefinition::configurable("field_photo", FieldKind::Image),
                image_uris
                    .iter()
                    .map(|uri| FieldValue::File(FileReference::new(*uri, "en")))
                    .collect(),
            ))
            .with_field(Field::new(FieldDefinition::configurable(
                "field_location",
                FieldKind::Geofield,
            )))
    }

    fn geo_value(entity: &Entity, field: &str) -> Option<String> {
        match entity.field(field).and_then(Field::first_value) {
            Some(FieldValue::Text(text)) => Some(text.clone()),
            _ => None,
        }
    }

    fn orchestrator(
        bundle: &str,
        display: FormDisplay,
        registry: StubRegistry,
        reader: StubReader,
    ) -> GeoExtractionOrchestrator {
        GeoExtractionOrchestrator::new(
            &settings_for(bundle),
            Arc::new(StubDisplays(display)),
            Arc::new(registry),
            Arc::new(reader),
        )
    }

    #[test]
    fn writes_wkt_point_from_gps_tags() {
        let registry = StubRegistry::new();
        registry.add_local_file("a.jpg");
        let (reader, _) = StubReader::with_gps("48.85", "2.35");
        let mut orch = orchestrator(
            "article",
            geofield_display(&[("field_location", "field_photo")]),
            registry,
            reader,
        );

        let mut entity = article(&["public://a.jpg"]);
        orch.on_entity_created("node", &mut entity);

        assert_eq!(
            geo_value(&entity, "field_location"),
            Some("POINT(2.35 48.85)".to_string())
        );
    }

    #[test]
    fn ineligible_bundle_is_never_written() {
        let registry = StubRegistry::new();
        registry.add_local_file("a.jpg");
        let (reader, calls) = StubReader::with_gps("48.85", "2.35");
        let mut orch = orchestrator(
            "page",
            geofield_display(&[("field_location", "field_photo")]),
            registry,
            reader,
        );

        let mut entity = article(&["public://a.jpg"]);
        orch.on_entity_created("node", &mut entity);

        assert_eq!(geo_value(&entity, "field_location"), None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn update_hook_is_a_no_op() {
        let registry = StubRegistry::new();
        registry.add_local_file("a.jpg");
        let (reader, calls) = StubReader::with_gps("48.85", "2.35");
        let mut orch = orchestrator(
            "article",
            geofield_display(&[("field_location", "field_photo")]),
            registry,
            reader,
        );

        let mut entity = article(&["public://a.jpg"]);
        orch.on_entity_updated("node", &mut entity);

        assert_eq!(geo_value(&entity, "field_location"), None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn image_field_without_values_leaves_geofield_unset() {
        let registry = StubRegistry::new();
        let (reader, calls) = StubReader::with_gps("48.85", "2.35");
        let mut orch = orchestrator(
            "article",
            geofield_display(&[("field_location", "field_photo")]),
            registry,
            reader,
        );

        let mut entity = article(&[]);
        orch.on_entity_created("node", &mut entity);

        assert_eq!(geo_value(&entity, "field_location"), None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failed_copy_skips_field_but_not_others() {
        let registry = StubRegistry::new();
        registry.add_local_file("b.jpg");
        let (reader, _) = StubReader::with_gps("48.85", "2.35");
        let mut orch = orchestrator(
            "article",
            geofield_display(&[
                ("field_location", "field_photo"),
                ("field_second_location", "field_second_photo"),
            ]),
            registry,
            reader,
        );

        let mut entity = article(&["bucket://broken/a.jpg"])
            .with_field(Field::with_values(
                FieldDefinition::configurable("field_second_photo", FieldKind::Image),
                vec![FieldValue::File(FileReference::new("public://b.jpg", "en"))],
            ))
            .with_field(Field::new(FieldDefinition::configurable(
                "field_second_location",
                FieldKind::Geofield,
            )));
        orch.on_entity_created("node", &mut entity);

        assert_eq!(geo_value(&entity, "field_location"), None);
        assert_eq!(
            geo_value(&entity, "field_second_location"),
            Some("POINT(2.35 48.85)".to_string())
        );
    }

    #[test]
    fn shared_image_field_is_read_once() {
        let registry = StubRegistry::new();
        registry.add_local_file("a.jpg");
        let (reader, calls) = StubReader::with_gps("48.85", "2.35");
        let mut orch = orchestrator(
            "article",
            geofield_display(&[
                ("field_location", "field_photo"),
                ("field_backup_location", "field_photo"),
            ]),
            registry,
            reader,
        );

        let mut entity = article(&["public://a.jpg"]).with_field(Field::new(
            FieldDefinition::configurable("field_backup_location", FieldKind::Geofield),
        ));
        orch.on_entity_created("node", &mut entity);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            geo_value(&entity, "field_location"),
            Some("POINT(2.35 48.85)".to_string())
        );
        assert_eq!(
            geo_value(&entity, "field_backup_location"),
            Some("POINT(2.35 48.85)".to_string())
        );
    }

    #[test]
    fn only_first_image_value_is_read() {
        let registry = StubRegistry::new();
        registry.add_local_file("a.jpg");
        registry.add_local_file("b.jpg");
        let (reader, calls) = StubReader::with_gps("48.85", "2.35");
        let mut orch = orchestrator(
            "article",
            geofield_display(&[("field_location", "field_photo")]),
            registry,
            reader,
        );

        let mut entity = article(&["public://a.jpg", "public://b.jpg"]);
        orch.on_entity_created("node", &mut entity);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn missing_gps_tags_write_empty_coordinates() {
        let registry = StubRegistry::new();
        registry.add_local_file("a.jpg");
        let (reader, _) = StubReader::empty();
        let mut orch = orchestrator(
            "article",
            geofield_display(&[("field_location", "field_photo")]),
            registry,
            reader,
        );

        let mut entity = article(&["public://a.jpg"]);
        orch.on_entity_created("node", &mut entity);

        assert_eq!(
            geo_value(&entity, "field_location"),
            Some("POINT( )".to_string())
        );
    }

    #[test]
    fn file_entity_uses_its_own_file() {
        let mut settings = Settings::default();
        settings
            .filetypes
            .insert("image".to_string(), "image".to_string());
        let registry = StubRegistry::new();
        registry.add_local_file("photo.jpg");
        let (reader, _) = StubReader::with_gps("48.85", "2.35");
        let mut orch = GeoExtractionOrchestrator::new(
            &settings,
            Arc::new(StubDisplays(geofield_display(&[("field_location", "file")]))),
            Arc::new(registry),
            Arc::new(reader),
        );

        let mut entity = Entity::file(
            "image",
            FileReference::new("public://photo.jpg", "en"),
        )
        .with_field(Field::new(FieldDefinition::configurable(
            "field_location",
            FieldKind::Geofield,
        )));
        orch.on_entity_created("file", &mut entity);

        assert_eq!(
            geo_value(&entity, "field_location"),
            Some("POINT(2.35 48.85)".to_string())
        );
    }
}
