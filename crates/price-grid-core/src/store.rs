// crates/price-grid-core/src/store.rs
// ============================================================================
// Module: Price Grid In-Memory Store
// Description: Simple in-memory matrix store and shared store wrapper.
// Purpose: Provide a deterministic store implementation without external deps.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides a simple in-memory implementation of [`MatrixStore`]
//! for tests and local demos, plus a clonable shared wrapper over any store
//! implementation. The in-memory store is not intended for production use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;

use crate::core::Matrix;
use crate::interfaces::MatrixStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory matrix store for tests and examples.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMatrixStore {
    /// Single optional record protected by a mutex.
    record: Arc<Mutex<Option<Matrix>>>,
}

impl InMemoryMatrixStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory store seeded with a record.
    #[must_use]
    pub fn with_record(matrix: Matrix) -> Self {
        Self {
            record: Arc::new(Mutex::new(Some(matrix))),
        }
    }
}

impl MatrixStore for InMemoryMatrixStore {
    fn load(&self) -> Result<Option<Matrix>, StoreError> {
        let guard = self
            .record
            .lock()
            .map_err(|_| StoreError::Store("matrix store mutex poisoned".to_string()))?;
        Ok(*guard)
    }

    fn save(&self, matrix: &Matrix) -> Result<(), StoreError> {
        let mut guard = self
            .record
            .lock()
            .map_err(|_| StoreError::Store("matrix store mutex poisoned".to_string()))?;
        *guard = Some(*matrix);
        Ok(())
    }
}

// ============================================================================
// SECTION: Shared Store Wrapper
// ============================================================================

/// Shared matrix store backed by an `Arc` trait object.
#[derive(Clone)]
pub struct SharedMatrixStore {
    /// Inner store implementation.
    inner: Arc<dyn MatrixStore + Send + Sync>,
}

impl SharedMatrixStore {
    /// Wraps a matrix store in a shared, clonable wrapper.
    #[must_use]
    pub fn from_store(store: impl MatrixStore + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// Wraps an existing shared store.
    #[must_use]
    pub const fn new(store: Arc<dyn MatrixStore + Send + Sync>) -> Self {
        Self {
            inner: store,
        }
    }
}

impl MatrixStore for SharedMatrixStore {
    fn load(&self) -> Result<Option<Matrix>, StoreError> {
        self.inner.load()
    }

    fn save(&self, matrix: &Matrix) -> Result<(), StoreError> {
        self.inner.save(matrix)
    }

    fn readiness(&self) -> Result<(), StoreError> {
        self.inner.readiness()
    }
}
