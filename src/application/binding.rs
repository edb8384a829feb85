// SPDX-License-Identifier: MPL-2.0
//! Geolocation field binding resolution.
//!
//! Inspects an entity's field definitions against its bundle's default
//! form display and emits a [`FieldBinding`] for every field rendered by
//! the "computed geolocation from image" widget.

use crate::application::port::display::FormDisplayProvider;
use crate::application::port::metadata::{GPS, GPS_LATITUDE};
use crate::domain::binding::{FieldBinding, MetadataSelector};
use crate::domain::entity::Entity;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Widget type identifying a computed-geolocation field.
pub const GEOFIELD_WIDGET: &str = "exif_geofield_readonly";

/// Widget setting naming the source image field.
pub const IMAGE_FIELD_SETTING: &str = "image_field";

/// Base field that may carry the widget despite not being configurable.
const TITLE_FIELD: &str = "title";

/// Resolves which of an entity's fields are computed-geolocation fields
/// and which image field each one is bound to.
pub struct GeoFieldBindingResolver {
    displays: Arc<dyn FormDisplayProvider>,
}

impl GeoFieldBindingResolver {
    #[must_use]
    pub fn new(displays: Arc<dyn FormDisplayProvider>) -> Self {
        Self { displays }
    }

    /// Returns a mapping from geolocation field name to its binding.
    ///
    /// A field qualifies when it is configurable (or the built-in `title`
    /// field), its form-display component uses [`GEOFIELD_WIDGET`], and
    /// that component's settings name a source image field. The selector
    /// is fixed to (`gps`, `gpslatitude`); longitude is implicitly paired
    /// through the GPS section.
    ///
    /// Returns an empty map when the bundle has no default form display
    /// or no qualifying components.
    #[must_use]
    pub fn resolve_bindings(
        &self,
        entity_type: &str,
        entity: &Entity,
    ) -> BTreeMap<String, FieldBinding> {
        let mut bindings = BTreeMap::new();

        let Some(display) = self.displays.default_display(entity_type, entity.bundle()) else {
            return bindings;
        };

        for field in entity.fields() {
            let definition = field.definition();
            let name = definition.name();
            if !definition.is_configurable() && name != TITLE_FIELD {
                continue;
            }
            let Some(component) = display.component(name) else {
                continue;
            };
            if component.widget != GEOFIELD_WIDGET {
                continue;
            }
            let Some(image_field) = component.settings.get(IMAGE_FIELD_SETTING) else {
                continue;
            };
            bindings.insert(
                name.to_string(),
                FieldBinding::new(name, image_field, MetadataSelector::new(GPS, GPS_LATITUDE)),
            );
        }

        bindings
    }
}
