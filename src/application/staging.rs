// SPDX-License-Identifier: MPL-2.0
//! Local path resolution for stored files.
//!
//! Local-scheme URIs already map to a filesystem path. Remote/virtual
//! URIs are staged: their content is copied once into a uniquely named
//! temporary local file, and a process-lifetime cache keyed by the URI
//! hash makes subsequent resolutions of the same URI reuse that copy.

use crate::application::port::storage::{
    scheme_of, target_of, StorageError, StreamWrapperRegistry,
};
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Resolves a storage URI to a readable local filesystem path,
/// transparently staging temporary copies for remote schemes.
pub struct LocalFileResolver {
    wrappers: Arc<dyn StreamWrapperRegistry>,
    /// Staged copies of remote files, keyed by URI hash. Lives for the
    /// lifetime of this resolver; never persisted across runs.
    staged: HashMap<String, PathBuf>,
}

impl LocalFileResolver {
    #[must_use]
    pub fn new(wrappers: Arc<dyn StreamWrapperRegistry>) -> Self {
        Self {
            wrappers,
            staged: HashMap::new(),
        }
    }

    /// Resolves `uri` to a local filesystem path.
    ///
    /// Local-scheme URIs are canonicalized and returned as-is. Remote
    /// URIs are copied into the temporary area under
    /// `exif_<hash>_<basename>` (existing files are overwritten, not
    /// appended) and the copy is reused for the rest of this resolver's
    /// lifetime.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the scheme cannot be resolved or
    /// staging a remote file fails. Copy failures are additionally logged
    /// with the offending URI so callers can degrade to skipping the
    /// field.
    pub fn resolve_local_path(&mut self, uri: &str) -> Result<PathBuf, StorageError> {
        if self.wrappers.is_local_scheme(scheme_of(uri)) {
            return self.wrappers.local_path(uri);
        }

        let cache_key = blake3::hash(uri.as_bytes()).to_hex().to_string();
        if let Some(path) = self.staged.get(&cache_key) {
            return Ok(path.clone());
        }

        match self.stage_copy(uri, &cache_key) {
            Ok(path) => {
                self.staged.insert(cache_key, path.clone());
                Ok(path)
            }
            Err(err) => {
                tracing::warn!(
                    uri,
                    error = %err,
                    "unable to create local temporary copy of remote file for exif extraction"
                );
                Err(err)
            }
        }
    }

    fn stage_copy(&self, uri: &str, cache_key: &str) -> Result<PathBuf, StorageError> {
        let basename = target_of(uri).rsplit('/').next().unwrap_or(uri);
        let destination = self
            .wrappers
            .temporary_dir()
            .join(format!("exif_{cache_key}_{basename}"));

        let mut source = self.wrappers.open(uri)?;
        // File::create truncates, so a stale copy with the same name is
        // replaced rather than appended to.
        let mut dest = File::create(&destination)
            .map_err(|e| StorageError::CopyFailed(e.to_string()))?;
        io::copy(&mut source, &mut dest).map_err(|e| StorageError::CopyFailed(e.to_string()))?;

        Ok(destination)
    }
}
