// crates/price-grid-server/tests/validation.rs
// ============================================================================
// Module: Matrix Validation Tests
// Description: Integration tests for the persistence validator.
// Purpose: Validate coercion, rejection, and error collection behavior.
// Dependencies: price-grid-server, price-grid-core, serde_json
// ============================================================================

//! ## Overview
//! Exercises the public validator surface: numeric-string coercion, closed
//! term and tier sets, non-short-circuiting error collection, and the
//! first-message contract.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

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

// ============================================================================
// SECTION: Imports
// ============================================================================

use price_grid_core::Term;
use price_grid_core::Tier;
use price_grid_server::MatrixValidationError;
use price_grid_server::MatrixValidator;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Test result alias for readable failures.
type TestResult = Result<(), String>;

/// Builds the validator, mapping schema failures to test errors.
fn validator() -> Result<MatrixValidator, String> {
    MatrixValidator::new().map_err(|err| format!("schema build failed: {err}"))
}

/// Builds a fully valid payload with distinct cell values.
fn valid_payload() -> Value {
    let mut payload = json!({});
    for (term_index, term) in Term::ALL.iter().enumerate() {
        let mut row = json!({});
        for (tier_index, tier) in Tier::ALL.iter().enumerate() {
            row[tier.as_str()] = json!((term_index * 10 + tier_index) as f64);
        }
        payload[term.as_str()] = row;
    }
    payload
}

/// Asserts a rejection whose first message contains the needle.
fn assert_rejected(
    result: Result<price_grid_core::Matrix, MatrixValidationError>,
    needle: &str,
) -> TestResult {
    match result {
        Ok(matrix) => Err(format!("expected rejection, got {matrix:?}")),
        Err(rejection) => {
            let message = rejection.first_message();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("message {message:?} does not contain {needle:?}"))
            }
        }
    }
}

// ============================================================================
// SECTION: Acceptance
// ============================================================================

/// A well-formed payload validates into the matching matrix.
#[test]
fn valid_payload_is_accepted() -> TestResult {
    let validator = validator()?;
    let matrix = validator
        .validate(&valid_payload())
        .map_err(|err| format!("unexpected rejection: {err}"))?;
    let echoed = serde_json::to_value(matrix).map_err(|err| err.to_string())?;
    if echoed == valid_payload() {
        Ok(())
    } else {
        Err(format!("echo mismatch: {echoed}"))
    }
}

/// Numeric strings coerce to numbers before the structural pass.
#[test]
fn numeric_strings_are_coerced() -> TestResult {
    let validator = validator()?;
    let mut payload = valid_payload();
    payload["36months"]["lite"] = json!("12.5");
    payload["mtm"]["unlimited"] = json!("  40 ");
    let matrix = validator
        .validate(&payload)
        .map_err(|err| format!("unexpected rejection: {err}"))?;
    let cell = matrix.cell(Term::Months36, Tier::Lite);
    if (cell - 12.5).abs() > f64::EPSILON {
        return Err(format!("coerced cell mismatch: {cell}"));
    }
    let cell = matrix.cell(Term::MonthToMonth, Tier::Unlimited);
    if (cell - 40.0).abs() > f64::EPSILON {
        return Err(format!("coerced cell mismatch: {cell}"));
    }
    Ok(())
}

// ============================================================================
// SECTION: Rejection
// ============================================================================

/// A non-numeric string names the offending field.
#[test]
fn non_numeric_cell_is_rejected() -> TestResult {
    let validator = validator()?;
    let mut payload = valid_payload();
    payload["36months"]["lite"] = json!("abc");
    assert_rejected(validator.validate(&payload), "36months.lite")
}

/// Non-finite numeric strings stay strings and fail the type check.
#[test]
fn non_finite_strings_are_rejected() -> TestResult {
    let validator = validator()?;
    for raw in ["NaN", "inf", "-inf", "1e999"] {
        let mut payload = valid_payload();
        payload["12months"]["standard"] = json!(raw);
        assert_rejected(validator.validate(&payload), "12months.standard")?;
    }
    Ok(())
}

/// Every term is required; a missing one is rejected.
#[test]
fn missing_term_is_rejected() -> TestResult {
    let validator = validator()?;
    let mut payload = valid_payload();
    payload.as_object_mut().ok_or("payload must be an object")?.remove("mtm");
    assert_rejected(validator.validate(&payload), "mtm")
}

/// Every tier is required; a missing one is rejected.
#[test]
fn missing_tier_is_rejected() -> TestResult {
    let validator = validator()?;
    let mut payload = valid_payload();
    payload["24months"]
        .as_object_mut()
        .ok_or("row must be an object")?
        .remove("standard");
    assert_rejected(validator.validate(&payload), "standard")
}

/// Unknown term keys are rejected by the closed shape.
#[test]
fn extra_term_is_rejected() -> TestResult {
    let validator = validator()?;
    let mut payload = valid_payload();
    payload["48months"] = json!({ "lite": 1, "standard": 2, "unlimited": 3 });
    assert_rejected(validator.validate(&payload), "48months")
}

/// Unknown tier keys are rejected by the closed shape.
#[test]
fn extra_tier_is_rejected() -> TestResult {
    let validator = validator()?;
    let mut payload = valid_payload();
    payload["mtm"]["premium"] = json!(99);
    assert_rejected(validator.validate(&payload), "premium")
}

/// A payload that is not an object at all is rejected.
#[test]
fn non_object_payload_is_rejected() -> TestResult {
    let validator = validator()?;
    assert_rejected(validator.validate(&json!([1, 2, 3])), "object")?;
    assert_rejected(validator.validate(&json!(null)), "object")
}

// ============================================================================
// SECTION: Error Collection
// ============================================================================

/// Validation collects every field error instead of stopping at the first.
#[test]
fn all_field_errors_are_collected() -> TestResult {
    let validator = validator()?;
    let mut payload = valid_payload();
    payload["36months"]["lite"] = json!("abc");
    payload["12months"]["unlimited"] = json!(true);
    payload["mtm"]["standard"] = json!(null);

    let Err(rejection) = validator.validate(&payload) else {
        return Err("expected rejection".to_string());
    };
    let errors = rejection.errors();
    if errors.len() < 3 {
        return Err(format!("expected at least 3 errors, got {}", errors.len()));
    }
    for needle in ["36months.lite", "12months.unlimited", "mtm.standard"] {
        if !errors.iter().any(|error| error.path == needle) {
            return Err(format!("no collected error for {needle}"));
        }
    }
    Ok(())
}

/// The surfaced message is exactly the first collected error.
#[test]
fn first_message_matches_first_error() -> TestResult {
    let validator = validator()?;
    let mut payload = valid_payload();
    payload["36months"]["lite"] = json!("abc");
    payload["mtm"]["standard"] = json!(false);

    let Err(rejection) = validator.validate(&payload) else {
        return Err("expected rejection".to_string());
    };
    let first = rejection
        .errors()
        .first()
        .ok_or("rejection must carry at least one error")?;
    if rejection.first_message() == first.to_string() {
        Ok(())
    } else {
        Err(format!(
            "first_message {:?} != first error {:?}",
            rejection.first_message(),
            first.to_string()
        ))
    }
}
