// SPDX-License-Identifier: MPL-2.0
//! Filesystem-backed stream wrapper registry.
//!
//! Implements the [`StreamWrapperRegistry`] port with a table of
//! scheme → directory wrappers. Local wrappers map URIs straight to
//! filesystem paths; non-local wrappers model remote or virtual storage
//! that is byte-accessible but not path-addressable (a mounted bucket,
//! for instance), so reads go through [`open`](StreamWrapperRegistry::open)
//! and callers stage their own local copies.

use crate::application::port::storage::{
    scheme_of, target_of, StorageError, StreamWrapperRegistry,
};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
struct Wrapper {
    root: PathBuf,
    local: bool,
}

/// Scheme → directory wrapper table with a designated temporary area.
#[derive(Debug, Clone)]
pub struct DiskStreamWrappers {
    wrappers: BTreeMap<String, Wrapper>,
    temporary: PathBuf,
}

impl DiskStreamWrappers {
    /// Creates a registry whose temporary area is `temporary`, registered
    /// as the local `temporary://` wrapper.
    #[must_use]
    pub fn new(temporary: impl Into<PathBuf>) -> Self {
        let temporary = temporary.into();
        let mut wrappers = BTreeMap::new();
        wrappers.insert(
            "temporary".to_string(),
            Wrapper {
                root: temporary.clone(),
                local: true,
            },
        );
        Self { wrappers, temporary }
    }

    /// Registers a local wrapper: URIs of this scheme resolve to paths
    /// under `root`.
    pub fn register_local(&mut self, scheme: impl Into<String>, root: impl Into<PathBuf>) {
        self.wrappers.insert(
            scheme.into(),
            Wrapper {
                root: root.into(),
                local: true,
            },
        );
    }

    /// Registers a non-local wrapper: content under `root` is readable
    /// but the scheme does not count as locally addressable.
    pub fn register_remote(&mut self, scheme: impl Into<String>, root: impl Into<PathBuf>) {
        self.wrappers.insert(
            scheme.into(),
            Wrapper {
                root: root.into(),
                local: false,
            },
        );
    }

    fn wrapper_path(&self, uri: &str) -> Result<PathBuf, StorageError> {
        match scheme_of(uri) {
            None => Ok(PathBuf::from(uri)),
            Some(scheme) => {
                let wrapper = self
                    .wrappers
                    .get(scheme)
                    .ok_or_else(|| StorageError::UnknownScheme(scheme.to_string()))?;
                Ok(wrapper.root.join(target_of(uri)))
            }
        }
    }
}

impl StreamWrapperRegistry for DiskStreamWrappers {
    fn is_local_scheme(&self, scheme: Option<&str>) -> bool {
        match scheme {
            None => true,
            Some(scheme) => self.wrappers.get(scheme).is_some_and(|w| w.local),
        }
    }

    fn local_path(&self, uri: &str) -> Result<PathBuf, StorageError> {
        if let Some(scheme) = scheme_of(uri) {
            if !self.is_local_scheme(Some(scheme)) {
                if !self.wrappers.contains_key(scheme) {
                    return Err(StorageError::UnknownScheme(scheme.to_string()));
                }
                return Err(StorageError::NotLocal(scheme.to_string()));
            }
        }
        self.wrapper_path(uri)?
            .canonicalize()
            .map_err(|e| StorageError::Io(e.to_string()))
    }

    fn open(&self, uri: &str) -> Result<Box<dyn Read>, StorageError> {
        let path = self.wrapper_path(uri)?;
        let file = File::open(path).map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(Box::new(file))
    }

    fn temporary_dir(&self) -> &Path {
        &self.temporary
    }
}
