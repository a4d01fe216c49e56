// crates/price-grid-core/tests/matrix_wire.rs
// ============================================================================
// Module: Matrix Wire Shape Tests
// Description: Tests for the persisted wire form of the pricing matrix.
// Purpose: Ensure term and tier wire names stay stable with no envelope.
// Dependencies: price-grid-core, serde_json
// ============================================================================

//! ## Overview
//! Validates that the matrix serializes to exactly the four term keys and
//! three tier keys the persisted record requires, and that labels parse back
//! into the closed enums.

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

use price_grid_core::Matrix;
use price_grid_core::Term;
use price_grid_core::Tier;
use serde_json::Value;
use serde_json::json;

/// The zero matrix serializes to the bare record shape with stable keys.
#[test]
fn zero_matrix_wire_shape() {
    let value = serde_json::to_value(Matrix::zero()).expect("serialize matrix");
    let row = json!({ "lite": 0.0, "standard": 0.0, "unlimited": 0.0 });
    assert_eq!(
        value,
        json!({
            "36months": row.clone(),
            "24months": row.clone(),
            "12months": row.clone(),
            "mtm": row,
        })
    );
}

/// Every object key matches the enum wire labels, with nothing extra.
#[test]
fn wire_keys_match_enum_labels() {
    let value = serde_json::to_value(Matrix::zero()).expect("serialize matrix");
    let Value::Object(terms) = value else {
        panic!("matrix must serialize to an object");
    };
    let mut term_keys: Vec<&str> = terms.keys().map(String::as_str).collect();
    term_keys.sort_unstable();
    let mut expected_terms: Vec<&str> = Term::ALL.iter().map(|term| term.as_str()).collect();
    expected_terms.sort_unstable();
    assert_eq!(term_keys, expected_terms);

    for row in terms.values() {
        let Value::Object(tiers) = row else {
            panic!("tier row must serialize to an object");
        };
        let mut tier_keys: Vec<&str> = tiers.keys().map(String::as_str).collect();
        tier_keys.sort_unstable();
        let mut expected_tiers: Vec<&str> = Tier::ALL.iter().map(|tier| tier.as_str()).collect();
        expected_tiers.sort_unstable();
        assert_eq!(tier_keys, expected_tiers);
    }
}

/// Term and tier labels parse back into the closed enums.
#[test]
fn labels_parse_back() {
    for term in Term::ALL {
        assert_eq!(term.as_str().parse::<Term>().expect("parse term"), term);
    }
    for tier in Tier::ALL {
        assert_eq!(tier.as_str().parse::<Tier>().expect("parse tier"), tier);
    }
    assert!("48months".parse::<Term>().is_err());
    assert!("premium".parse::<Tier>().is_err());
}
