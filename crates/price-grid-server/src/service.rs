// crates/price-grid-server/src/service.rs
// ============================================================================
// Module: Save-Cycle Service
// Description: Validate-and-store orchestration over a shared matrix store.
// Purpose: Drive the Idle -> Validating -> Persisting save cycle.
// Dependencies: crate::validation, price-grid-core, thiserror
// ============================================================================

//! ## Overview
//! The pricing service owns one save cycle:
//! `Idle -> Validating -> {Persisting -> Idle(success)} | Idle(rejected)`.
//! Validation always runs first; a rejected payload never reaches storage.
//! There is no retry — callers re-invoke the save. Storing the same matrix
//! twice yields the same persisted result.

// ============================================================================
// SECTION: Imports
// ============================================================================

use price_grid_core::Matrix;
use price_grid_core::MatrixStore;
use price_grid_core::SharedMatrixStore;
use price_grid_core::StoreError;
use serde_json::Value;
use thiserror::Error;

use crate::validation::MatrixValidationError;
use crate::validation::MatrixValidator;
use crate::validation::SchemaBuildError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Save-cycle errors.
///
/// # Invariants
/// - `Rejected` always means storage was left untouched.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Payload failed schema validation; no write was performed.
    #[error("{0}")]
    Rejected(#[from] MatrixValidationError),
    /// The validated matrix could not be persisted.
    #[error("{0}")]
    Store(#[from] StoreError),
}

// ============================================================================
// SECTION: Pricing Service
// ============================================================================

/// Service driving matrix loads and the validate-and-store cycle.
pub struct PricingService {
    /// Shared persistence backend.
    store: SharedMatrixStore,
    /// Compiled payload validator.
    validator: MatrixValidator,
}

impl PricingService {
    /// Builds a pricing service over a shared store.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaBuildError`] when the matrix schema fails to compile.
    pub fn new(store: SharedMatrixStore) -> Result<Self, SchemaBuildError> {
        Ok(Self {
            store,
            validator: MatrixValidator::new()?,
        })
    }

    /// Loads the persisted matrix, or the all-zero matrix when no record
    /// exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the record exists but cannot be read.
    pub fn load_pricing(&self) -> Result<Matrix, StoreError> {
        Ok(self.store.load()?.unwrap_or_else(Matrix::zero))
    }

    /// Validates a save payload and persists the canonical matrix.
    ///
    /// On success the entire record is replaced and the canonical matrix is
    /// echoed back. On rejection the collected validation errors are returned
    /// and storage is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::Rejected`] for schema violations and
    /// [`SaveError::Store`] for persistence failures.
    pub fn validate_and_store(&self, payload: &Value) -> Result<Matrix, SaveError> {
        let matrix = self.validator.validate(payload)?;
        self.store.save(&matrix)?;
        Ok(matrix)
    }

    /// Reports readiness of the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store is unavailable.
    pub fn readiness(&self) -> Result<(), StoreError> {
        self.store.readiness()
    }
}
