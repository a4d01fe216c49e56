// crates/price-grid-store-file/src/store.rs
// ============================================================================
// Module: Flat-File Matrix Store
// Description: Durable MatrixStore backed by a single JSON document.
// Purpose: Persist the pricing record with atomic whole-file replacement.
// Dependencies: price-grid-core, serde_json
// ============================================================================

//! ## Overview
//! This module implements a durable [`MatrixStore`] over one flat JSON file.
//! The document mirrors the matrix wire shape exactly, with no wrapping
//! envelope. Saves serialize the matrix, write a sibling temp file, and
//! rename it over the record so the overwrite is atomic from the caller's
//! perspective. Loads fail closed: a record that exists but cannot be parsed
//! is a corruption error, never a silently substituted default.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;

use price_grid_core::Matrix;
use price_grid_core::MatrixStore;
use price_grid_core::StoreError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Suffix appended to the record path for the temporary write file.
const TEMP_SUFFIX: &str = ".tmp";

// ============================================================================
// SECTION: Config
// ============================================================================

/// File store configuration.
///
/// # Invariants
/// - `path` names the record file itself, not a directory.
#[derive(Debug, Clone)]
pub struct FileStoreConfig {
    /// Path of the persisted JSON record.
    pub path: PathBuf,
}

// ============================================================================
// SECTION: File Store
// ============================================================================

/// Flat-file matrix store.
///
/// # Invariants
/// - At most one writer mutates the record at a time (internal mutex).
/// - The record on disk is always a complete document; partial writes are
///   confined to the temp file.
#[derive(Debug)]
pub struct FileMatrixStore {
    /// Path of the persisted JSON record.
    path: PathBuf,
    /// Writer serialization lock.
    write_lock: Mutex<()>,
}

impl FileMatrixStore {
    /// Creates a file store for the given configuration.
    #[must_use]
    pub fn new(config: FileStoreConfig) -> Self {
        Self {
            path: config.path,
            write_lock: Mutex::new(()),
        }
    }

    /// Creates a file store for a record path.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileStoreConfig {
            path: path.into(),
        })
    }

    /// Returns the record path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MatrixStore for FileMatrixStore {
    fn load(&self) -> Result<Option<Matrix>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Io(err.to_string())),
        };
        let matrix = serde_json::from_slice::<Matrix>(&bytes)
            .map_err(|err| StoreError::Corrupt(err.to_string()))?;
        Ok(Some(matrix))
    }

    fn save(&self, matrix: &Matrix) -> Result<(), StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Store("file store mutex poisoned".to_string()))?;
        let bytes = serde_json::to_vec_pretty(matrix)
            .map_err(|err| StoreError::Invalid(err.to_string()))?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| StoreError::Io(err.to_string()))?;
        }
        let temp_path = temp_path(&self.path);
        fs::write(&temp_path, &bytes).map_err(|err| StoreError::Io(err.to_string()))?;
        fs::rename(&temp_path, &self.path).map_err(|err| {
            // Leave no stale temp file behind on a failed rename.
            let _ = fs::remove_file(&temp_path);
            StoreError::Io(err.to_string())
        })
    }

    fn readiness(&self) -> Result<(), StoreError> {
        match self.load() {
            Ok(_) => Ok(()),
            Err(err) => Err(err),
        }
    }
}

/// Builds the sibling temp path for an atomic record replacement.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}
