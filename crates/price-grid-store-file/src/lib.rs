// crates/price-grid-store-file/src/lib.rs
// ============================================================================
// Module: Price Grid File Store Library
// Description: Durable matrix store backed by a single flat JSON document.
// Purpose: Expose the file-backed MatrixStore implementation.
// Dependencies: crate::store
// ============================================================================

//! ## Overview
//! This crate persists the pricing matrix as one flat JSON document that
//! mirrors the matrix wire shape exactly. Every successful save replaces the
//! whole record atomically.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use store::FileMatrixStore;
pub use store::FileStoreConfig;
