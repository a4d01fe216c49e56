// crates/price-grid-core/src/interfaces/mod.rs
// ============================================================================
// Module: Price Grid Interfaces
// Description: Backend-agnostic storage interface for the pricing matrix.
// Purpose: Define the persistence contract used by servers and tools.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how Price Grid integrates with storage backends without
//! embedding backend-specific details. Implementations must fail closed on
//! missing or invalid data: a record that cannot be read intact is an error,
//! never a silently substituted default.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::Matrix;

// ============================================================================
// SECTION: Matrix Store
// ============================================================================

/// Matrix store errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store I/O error.
    #[error("matrix store io error: {0}")]
    Io(String),
    /// Store data is corrupted or fails to parse.
    #[error("matrix store corruption: {0}")]
    Corrupt(String),
    /// Store data is invalid.
    #[error("matrix store invalid data: {0}")]
    Invalid(String),
    /// Store reported an error.
    #[error("matrix store error: {0}")]
    Store(String),
}

/// Persistence contract for the single pricing-matrix record.
///
/// The store holds at most one record. Saving replaces the entire record;
/// there is no merge or partial update. Saving the same matrix twice must
/// yield the same persisted result.
pub trait MatrixStore {
    /// Loads the persisted matrix, or `None` when no record exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the record exists but cannot be read.
    fn load(&self) -> Result<Option<Matrix>, StoreError>;

    /// Overwrites the persisted record with the given matrix.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the write fails.
    fn save(&self, matrix: &Matrix) -> Result<(), StoreError>;

    /// Reports store readiness for liveness/readiness probes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store is unavailable.
    fn readiness(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
