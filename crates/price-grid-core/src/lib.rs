// crates/price-grid-core/src/lib.rs
// ============================================================================
// Module: Price Grid Core Library
// Description: Public API surface for the Price Grid core.
// Purpose: Expose the matrix model, edit state machine, and store interfaces.
// Dependencies: crate::{core, interfaces, store}
// ============================================================================

//! ## Overview
//! Price Grid core provides the pricing matrix model, the pure edit/reset
//! state machine, and the backend-agnostic store interfaces. It performs no
//! I/O itself; loading and saving are orchestrated by callers through the
//! [`MatrixStore`] contract.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::MatrixStore;
pub use interfaces::StoreError;
pub use store::InMemoryMatrixStore;
pub use store::SharedMatrixStore;
