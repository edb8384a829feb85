// SPDX-License-Identifier: MPL-2.0
//! In-memory form-display registry.
//!
//! Implements the [`FormDisplayProvider`] port with a plain map keyed by
//! `entity_type.bundle`. Hosts with their own form-display storage
//! implement the port directly; this adapter covers embedders that load
//! display configuration once (e.g. from TOML via serde) and hand it over.

use crate::application::port::display::{FormDisplay, FormDisplayProvider};
use std::collections::BTreeMap;

/// Static registry of default form displays.
#[derive(Debug, Clone, Default)]
pub struct StaticFormDisplays {
    displays: BTreeMap<String, FormDisplay>,
}

impl StaticFormDisplays {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the default display of `entity_type`/`bundle`, builder
    /// style.
    #[must_use]
    pub fn with_display(
        mut self,
        entity_type: &str,
        bundle: &str,
        display: FormDisplay,
    ) -> Self {
        self.insert(entity_type, bundle, display);
        self
    }

    /// Registers the default display of `entity_type`/`bundle`.
    pub fn insert(&mut self, entity_type: &str, bundle: &str, display: FormDisplay) {
        self.displays
            .insert(format!("{entity_type}.{bundle}"), display);
    }
}

impl FormDisplayProvider for StaticFormDisplays {
    fn default_display(&self, entity_type: &str, bundle: &str) -> Option<FormDisplay> {
        self.displays
            .get(&format!("{entity_type}.{bundle}"))
            .cloned()
    }
}
