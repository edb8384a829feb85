// SPDX-License-Identifier: MPL-2.0
//! Form-display lookup port definition.
//!
//! A form display describes which widget renders each field in an entry
//! form, per entity type and bundle. This crate only inspects widget types
//! and settings; it never renders anything.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One component of a form display: the widget rendering a field and its
/// settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDisplayComponent {
    /// Widget type identifier, e.g. `exif_geofield_readonly`.
    pub widget: String,

    /// Widget settings as opaque key/value pairs.
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
}

impl FormDisplayComponent {
    /// Creates a component with no settings.
    #[must_use]
    pub fn new(widget: impl Into<String>) -> Self {
        Self {
            widget: widget.into(),
            settings: BTreeMap::new(),
        }
    }

    /// Adds a setting, builder style.
    #[must_use]
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }
}

/// The default form display of one bundle: field name → component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDisplay {
    #[serde(default)]
    components: BTreeMap<String, FormDisplayComponent>,
}

impl FormDisplay {
    /// Creates an empty form display.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a component for a field, builder style.
    #[must_use]
    pub fn with_component(
        mut self,
        field_name: impl Into<String>,
        component: FormDisplayComponent,
    ) -> Self {
        self.components.insert(field_name.into(), component);
        self
    }

    /// Returns the component configured for a field, if any.
    #[must_use]
    pub fn component(&self, field_name: &str) -> Option<&FormDisplayComponent> {
        self.components.get(field_name)
    }
}

/// Port for looking up the default form display of a bundle.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`.
pub trait FormDisplayProvider: Send + Sync {
    /// Returns the default form display for `entity_type`/`bundle`, or
    /// `None` when the bundle has no configured display.
    fn default_display(&self, entity_type: &str, bundle: &str) -> Option<FormDisplay>;
}
