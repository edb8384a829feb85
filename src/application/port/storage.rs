// SPDX-License-Identifier: MPL-2.0
//! Storage port definition.
//!
//! File URIs carry a storage scheme (`public://photo.jpg`,
//! `bucket://2024/photo.jpg`, or a bare filesystem path). A
//! [`StreamWrapperRegistry`] knows which schemes are backed by the local
//! filesystem, maps local URIs to real paths, and opens a byte stream for
//! any registered URI so remote content can be staged locally.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Extracts the scheme of a storage URI, e.g. `public://a.jpg` → `public`.
///
/// Returns `None` for bare filesystem paths.
#[must_use]
pub fn scheme_of(uri: &str) -> Option<&str> {
    let (scheme, _) = uri.split_once("://")?;
    if scheme.is_empty() {
        None
    } else {
        Some(scheme)
    }
}

/// Strips the scheme of a storage URI, yielding the wrapper-relative target.
#[must_use]
pub fn target_of(uri: &str) -> &str {
    uri.split_once("://").map_or(uri, |(_, target)| target)
}

// =============================================================================
// StorageError
// =============================================================================

/// Errors that can occur while resolving or copying stored files.
#[derive(Debug, Clone)]
pub enum StorageError {
    /// No wrapper is registered for the URI's scheme.
    UnknownScheme(String),

    /// The scheme is registered but is not backed by a local path.
    NotLocal(String),

    /// Copying remote content into local temporary storage failed.
    CopyFailed(String),

    /// Underlying filesystem error.
    Io(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::UnknownScheme(scheme) => {
                write!(f, "No stream wrapper registered for scheme: {scheme}")
            }
            StorageError::NotLocal(scheme) => {
                write!(f, "Scheme is not locally addressable: {scheme}")
            }
            StorageError::CopyFailed(msg) => write!(f, "Failed to copy remote file: {msg}"),
            StorageError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

// =============================================================================
// StreamWrapperRegistry Trait
// =============================================================================

/// Port for storage scheme resolution and byte access.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`.
pub trait StreamWrapperRegistry: Send + Sync {
    /// Returns `true` when the scheme maps directly to the local
    /// filesystem. Bare paths (no scheme) are always local.
    fn is_local_scheme(&self, scheme: Option<&str>) -> bool;

    /// Resolves a local-scheme URI to a canonical filesystem path.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the scheme is unknown, not local,
    /// or the path does not exist.
    fn local_path(&self, uri: &str) -> Result<PathBuf, StorageError>;

    /// Opens a byte stream for any registered URI, local or not.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the scheme is unknown or the
    /// content cannot be opened.
    fn open(&self, uri: &str) -> Result<Box<dyn Read>, StorageError>;

    /// The designated temporary storage area for staged copies.
    fn temporary_dir(&self) -> &Path;
}
