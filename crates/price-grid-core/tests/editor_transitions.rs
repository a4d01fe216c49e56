// crates/price-grid-core/tests/editor_transitions.rs
// ============================================================================
// Module: Editor Transition Tests
// Description: Tests for the pure edit/reset state machine.
// Purpose: Ensure load, cancel, clear, and cell edits transition atomically.
// Dependencies: price-grid-core
// ============================================================================

//! ## Overview
//! Exercises every action of the edit state machine, including the
//! lite-drives-siblings derived rule and the no-op rejection of non-numeric
//! input.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use price_grid_core::EditAction;
use price_grid_core::EditorState;
use price_grid_core::Matrix;
use price_grid_core::Term;
use price_grid_core::Tier;
use price_grid_core::TierRow;
use price_grid_core::apply;
use price_grid_core::parse_cell_value;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Builds a matrix with distinct prices in every cell.
fn sample_matrix() -> Matrix {
    let mut matrix = Matrix::zero();
    for (row_index, term) in Term::ALL.into_iter().enumerate() {
        for (col_index, tier) in Tier::ALL.into_iter().enumerate() {
            #[allow(clippy::cast_precision_loss, reason = "Small test indices.")]
            let value = (row_index * 10 + col_index + 1) as f64;
            matrix.row_mut(term).set_price(tier, value);
        }
    }
    matrix
}

/// Dispatches a cell edit with a raw string value.
fn edit(state: &EditorState, term: Term, tier: Tier, raw: &str) -> EditorState {
    apply(state, EditAction::EditCell {
        term,
        tier,
        raw_value: raw.to_string(),
    })
}

// ============================================================================
// SECTION: Load and Baseline
// ============================================================================

/// A load adopts the confirmed matrix into both slots.
#[test]
fn load_sets_current_and_baseline() {
    let loaded = sample_matrix();
    let state = apply(&EditorState::new(), EditAction::Load { matrix: loaded });
    assert_eq!(state.current, loaded);
    assert_eq!(state.baseline, loaded);
}

/// Cancel restores current to the last-known-persisted value.
#[test]
fn set_baseline_restores_after_edits() {
    let loaded = sample_matrix();
    let mut state = apply(&EditorState::new(), EditAction::Load { matrix: loaded });
    state = edit(&state, Term::Months12, Tier::Standard, "99");
    state = edit(&state, Term::MonthToMonth, Tier::Lite, "7");
    assert_ne!(state.current, loaded);

    let restored = apply(&state, EditAction::SetBaseline { matrix: None });
    assert_eq!(restored.current, loaded);
    assert_eq!(restored.baseline, loaded);
}

/// An explicit baseline payload replaces both slots.
#[test]
fn set_baseline_with_payload_adopts_it() {
    let loaded = sample_matrix();
    let state = apply(&EditorState::new(), EditAction::Load { matrix: loaded });
    let replacement = Matrix::zero();
    let next = apply(&state, EditAction::SetBaseline {
        matrix: Some(replacement),
    });
    assert_eq!(next.current, replacement);
    assert_eq!(next.baseline, replacement);
}

/// Baseline restore immediately after a load is idempotent.
#[test]
fn set_baseline_after_load_is_idempotent() {
    let loaded = sample_matrix();
    let state = apply(&EditorState::new(), EditAction::Load { matrix: loaded });
    let restored = apply(&state, EditAction::SetBaseline { matrix: None });
    assert_eq!(restored, state);
}

// ============================================================================
// SECTION: Clear
// ============================================================================

/// Clear zeroes every current cell and never touches the baseline.
#[test]
fn clear_resets_current_only() {
    let loaded = sample_matrix();
    let state = apply(&EditorState::new(), EditAction::Load { matrix: loaded });
    let cleared = apply(&state, EditAction::Clear);
    assert_eq!(cleared.current, Matrix::zero());
    assert_eq!(cleared.baseline, loaded);

    // Cancel still recovers the last-known-persisted value after a clear.
    let recovered = apply(&cleared, EditAction::SetBaseline { matrix: None });
    assert_eq!(recovered.current, loaded);
}

// ============================================================================
// SECTION: Cell Edits
// ============================================================================

/// A lite edit derives the standard and unlimited prices for that term.
#[test]
fn lite_edit_derives_siblings() {
    let state = apply(&EditorState::new(), EditAction::Load {
        matrix: sample_matrix(),
    });
    for term in Term::ALL {
        let next = edit(&state, term, Tier::Lite, "10");
        assert_eq!(*next.current.row(term), TierRow {
            lite: 10.0,
            standard: 20.0,
            unlimited: 30.0,
        });
    }
}

/// Editing standard or unlimited touches only that one cell.
#[test]
fn sibling_edit_touches_one_cell() {
    let loaded = sample_matrix();
    let state = apply(&EditorState::new(), EditAction::Load { matrix: loaded });
    for term in Term::ALL {
        for tier in [Tier::Standard, Tier::Unlimited] {
            let next = edit(&state, term, tier, "42.5");
            assert_eq!(next.current.cell(term, tier), 42.5);
            assert_eq!(next.current.cell(term, Tier::Lite), loaded.cell(term, Tier::Lite));
            let sibling = if tier == Tier::Standard { Tier::Unlimited } else { Tier::Standard };
            assert_eq!(next.current.cell(term, sibling), loaded.cell(term, sibling));
        }
    }
}

/// A lite edit overwrites previously entered sibling values.
#[test]
fn lite_edit_overwrites_prior_sibling_edits() {
    let state = apply(&EditorState::new(), EditAction::Load {
        matrix: sample_matrix(),
    });
    let edited = edit(&state, Term::Months36, Tier::Unlimited, "500");
    let derived = edit(&edited, Term::Months36, Tier::Lite, "3");
    assert_eq!(*derived.current.row(Term::Months36), TierRow {
        lite: 3.0,
        standard: 6.0,
        unlimited: 9.0,
    });
}

/// Non-numeric input leaves the state byte-for-byte unchanged.
#[test]
fn non_numeric_edit_is_a_no_op() {
    let state = apply(&EditorState::new(), EditAction::Load {
        matrix: sample_matrix(),
    });
    for raw in ["abc", "", "  ", "1.2.3", "NaN", "inf", "-inf"] {
        let next = edit(&state, Term::Months24, Tier::Standard, raw);
        assert_eq!(next, state, "raw value {raw:?} must not change state");
    }
}

/// Edits never touch the baseline slot.
#[test]
fn edits_leave_baseline_untouched() {
    let loaded = sample_matrix();
    let mut state = apply(&EditorState::new(), EditAction::Load { matrix: loaded });
    state = edit(&state, Term::Months36, Tier::Lite, "1");
    state = edit(&state, Term::MonthToMonth, Tier::Unlimited, "2");
    assert_eq!(state.baseline, loaded);
}

// ============================================================================
// SECTION: Input Parsing
// ============================================================================

/// The parse helper accepts finite numeric strings and rejects the rest.
#[test]
fn parse_cell_value_accepts_finite_numbers() {
    assert_eq!(parse_cell_value("10"), Some(10.0));
    assert_eq!(parse_cell_value(" 42.5 "), Some(42.5));
    assert_eq!(parse_cell_value("-3"), Some(-3.0));
    assert_eq!(parse_cell_value("1e3"), Some(1000.0));
    assert_eq!(parse_cell_value(""), None);
    assert_eq!(parse_cell_value("ten"), None);
    assert_eq!(parse_cell_value("NaN"), None);
    assert_eq!(parse_cell_value("inf"), None);
}
