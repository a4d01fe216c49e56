// crates/price-grid-core/src/core/editor.rs
// ============================================================================
// Module: Matrix Edit State Machine
// Description: Pure edit/reset transitions over the pricing matrix.
// Purpose: Apply load, cancel, clear, and cell-edit actions without I/O.
// Dependencies: crate::core::matrix
// ============================================================================

//! ## Overview
//! The edit state machine is an explicit transition function
//! `(EditorState, EditAction) -> EditorState`. It is pure and side-effect
//! free; all loading and saving is performed by an orchestrating layer that
//! dispatches actions and then issues network or storage effects. Each
//! dispatch is atomic: either the whole new state is produced or the input
//! state is returned unchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::matrix::Matrix;
use crate::core::matrix::Term;
use crate::core::matrix::Tier;
use crate::core::matrix::TierRow;

// ============================================================================
// SECTION: Derived-Row Policy
// ============================================================================

/// Multiplier deriving the standard price from a lite edit.
pub const STANDARD_MULTIPLIER: f64 = 2.0;
/// Multiplier deriving the unlimited price from a lite edit.
pub const UNLIMITED_MULTIPLIER: f64 = 3.0;

/// Derives a full tier row from a lite price.
///
/// The lite price is the canonical driver of the other two tiers: standard is
/// twice the lite price and unlimited is three times the lite price. The
/// derived row is non-negative whenever `value` is non-negative.
#[must_use]
pub fn derive_lite_row(value: f64) -> TierRow {
    TierRow {
        lite: value,
        standard: value * STANDARD_MULTIPLIER,
        unlimited: value * UNLIMITED_MULTIPLIER,
    }
}

// ============================================================================
// SECTION: Editor State
// ============================================================================

/// Editable matrix state.
///
/// # Invariants
/// - `baseline` only ever holds a value confirmed by the storage layer
///   (loaded from it or echoed by a successful save), never a mid-edit value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EditorState {
    /// Matrix currently being edited.
    pub current: Matrix,
    /// Last-known-persisted matrix backing the Cancel action.
    pub baseline: Matrix,
}

impl EditorState {
    /// Returns the initial state with both slots all-zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state adopted after a confirmed load or save echo.
    #[must_use]
    pub const fn from_confirmed(matrix: Matrix) -> Self {
        Self {
            current: matrix,
            baseline: matrix,
        }
    }
}

// ============================================================================
// SECTION: Actions
// ============================================================================

/// Actions accepted by the edit state machine.
///
/// # Invariants
/// - Variants are exhaustive; unknown actions cannot be dispatched.
#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    /// Adopt a server-confirmed matrix into both slots.
    ///
    /// The payload is mandatory: a load without a matrix has no defined
    /// meaning and is rejected at the type level.
    Load {
        /// Matrix confirmed by the storage layer.
        matrix: Matrix,
    },
    /// Discard in-progress edits and fall back to a confirmed matrix.
    ///
    /// With no payload the baseline is restored into the current slot; with a
    /// payload both slots adopt the supplied matrix.
    SetBaseline {
        /// Optional replacement for the baseline.
        matrix: Option<Matrix>,
    },
    /// Reset the current matrix to all-zero, leaving the baseline untouched.
    Clear,
    /// Write a parsed cell value into the current matrix.
    ///
    /// Editing the lite tier also derives the standard and unlimited prices
    /// for that term via [`derive_lite_row`]; editing either sibling touches
    /// only that one cell. A non-numeric raw value makes the dispatch a
    /// no-op.
    EditCell {
        /// Contract term of the edited cell.
        term: Term,
        /// Service tier of the edited cell.
        tier: Tier,
        /// Raw input text as typed by the user.
        raw_value: String,
    },
}

// ============================================================================
// SECTION: Transition Function
// ============================================================================

/// Parses raw cell input into a finite number.
///
/// Returns `None` for anything that is not a finite numeric string. The
/// transition function silently rejects such input; UIs that want to surface
/// a hint can pre-validate with this helper without changing the no-op
/// dispatch contract.
#[must_use]
pub fn parse_cell_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Applies one action to the editor state, producing the next state.
///
/// Dispatch is atomic and synchronous. The only rejection path is a
/// non-numeric [`EditAction::EditCell`] value, which returns the input state
/// unchanged.
#[must_use]
pub fn apply(state: &EditorState, action: EditAction) -> EditorState {
    match action {
        EditAction::Load { matrix } => EditorState::from_confirmed(matrix),
        EditAction::SetBaseline { matrix } => {
            EditorState::from_confirmed(matrix.unwrap_or(state.baseline))
        }
        EditAction::Clear => EditorState {
            current: Matrix::zero(),
            baseline: state.baseline,
        },
        EditAction::EditCell { term, tier, raw_value } => {
            let Some(value) = parse_cell_value(&raw_value) else {
                return *state;
            };
            let mut current = state.current;
            if tier == Tier::Lite {
                *current.row_mut(term) = derive_lite_row(value);
            } else {
                current.row_mut(term).set_price(tier, value);
            }
            EditorState {
                current,
                baseline: state.baseline,
            }
        }
    }
}
