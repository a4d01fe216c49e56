// crates/price-grid-core/src/core/mod.rs
// ============================================================================
// Module: Price Grid Core Types
// Description: Matrix model and edit state machine modules.
// Purpose: Group the pure domain types behind a single namespace.
// Dependencies: crate::core::{editor, matrix}
// ============================================================================

//! ## Overview
//! The core namespace holds the pricing matrix model and the pure edit state
//! machine. Everything in here is synchronous, deterministic, and free of
//! I/O so the transition logic is testable without network or storage mocks.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod editor;
pub mod matrix;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use editor::EditAction;
pub use editor::EditorState;
pub use editor::STANDARD_MULTIPLIER;
pub use editor::UNLIMITED_MULTIPLIER;
pub use editor::apply;
pub use editor::derive_lite_row;
pub use editor::parse_cell_value;
pub use matrix::Matrix;
pub use matrix::Term;
pub use matrix::Tier;
pub use matrix::TierRow;
pub use matrix::UnknownLabelError;
