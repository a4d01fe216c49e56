// crates/price-grid-server/src/validation.rs
// ============================================================================
// Module: Matrix Payload Validation
// Description: Schema-as-data validation for save payloads.
// Purpose: Reject malformed matrices before any write reaches storage.
// Dependencies: price-grid-core, jsonschema, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The persistence validator checks a full save payload against the fixed
//! term-by-tier shape. The shape is declarative data: a JSON Schema built
//! from [`Term::ALL`] and [`Tier::ALL`], so adding a term or tier is a
//! one-place change in the enums. Validation is non-short-circuiting — every
//! field error is collected, and the first collected message is the one
//! surfaced to callers. Numeric strings are coerced to numbers before the
//! structural pass; nothing else is rewritten.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use jsonschema::Draft;
use jsonschema::Validator;
use price_grid_core::Matrix;
use price_grid_core::Term;
use price_grid_core::Tier;
use serde_json::Map;
use serde_json::Number;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// A single collected field error.
///
/// # Invariants
/// - `path` is a dotted field path into the payload; empty for the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path of the offending field.
    pub path: String,
    /// Human-readable message for the field.
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "\"{}\" {}", self.path, self.message)
        }
    }
}

/// Validation failure carrying every collected field error.
///
/// # Invariants
/// - Holds at least one error; ordering matches collection order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.first_message())]
pub struct MatrixValidationError {
    /// Collected field errors in document order.
    errors: Vec<FieldError>,
}

impl MatrixValidationError {
    /// Wraps a non-empty list of collected field errors.
    #[must_use]
    pub const fn new(errors: Vec<FieldError>) -> Self {
        Self {
            errors,
        }
    }

    /// Returns every collected field error in order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the first collected validation message.
    #[must_use]
    pub fn first_message(&self) -> String {
        self.errors.first().map_or_else(
            || "payload does not match the matrix shape".to_string(),
            ToString::to_string,
        )
    }
}

/// Error raised when the matrix schema itself fails to compile.
///
/// # Invariants
/// - Only reachable through programming errors in schema construction.
#[derive(Debug, Error)]
pub enum SchemaBuildError {
    /// The generated schema was rejected by the validator.
    #[error("invalid matrix schema: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Validator
// ============================================================================

/// Persistence validator for full matrix payloads.
///
/// # Invariants
/// - The compiled schema mirrors the closed term and tier sets exactly.
pub struct MatrixValidator {
    /// Compiled structural schema.
    validator: Validator,
}

impl MatrixValidator {
    /// Builds the validator from the declarative matrix schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaBuildError`] when the generated schema fails to
    /// compile.
    pub fn new() -> Result<Self, SchemaBuildError> {
        let schema = matrix_schema();
        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .build(&schema)
            .map_err(|err| SchemaBuildError::Invalid(err.to_string()))?;
        Ok(Self {
            validator,
        })
    }

    /// Validates a save payload and returns the canonical matrix.
    ///
    /// Numeric strings are coerced to numbers first; the structural pass then
    /// collects every field error without short-circuiting.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixValidationError`] with the ordered error list when the
    /// payload does not match the matrix shape. Storage is never touched by
    /// this method.
    pub fn validate(&self, payload: &Value) -> Result<Matrix, MatrixValidationError> {
        let coerced = coerce_numeric_strings(payload);
        let errors: Vec<FieldError> =
            self.validator.iter_errors(&coerced).map(|err| field_error(&err)).collect();
        if !errors.is_empty() {
            return Err(MatrixValidationError::new(errors));
        }
        serde_json::from_value::<Matrix>(coerced).map_err(|err| {
            MatrixValidationError::new(vec![FieldError {
                path: String::new(),
                message: format!("payload does not match the matrix shape: {err}"),
            }])
        })
    }
}

// ============================================================================
// SECTION: Declarative Schema
// ============================================================================

/// Builds the fixed matrix schema from the closed term and tier sets.
fn matrix_schema() -> Value {
    let tier_names: Vec<&str> = Tier::ALL.iter().map(|tier| tier.as_str()).collect();
    let mut tier_properties = Map::new();
    for tier in &tier_names {
        tier_properties.insert((*tier).to_string(), json!({ "type": "number" }));
    }
    let row_schema = json!({
        "type": "object",
        "properties": tier_properties,
        "required": tier_names,
        "additionalProperties": false,
    });

    let term_names: Vec<&str> = Term::ALL.iter().map(|term| term.as_str()).collect();
    let mut term_properties = Map::new();
    for term in &term_names {
        term_properties.insert((*term).to_string(), row_schema.clone());
    }
    json!({
        "type": "object",
        "properties": term_properties,
        "required": term_names,
        "additionalProperties": false,
    })
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Coerces numeric strings to numbers, leaving everything else untouched.
///
/// Only finite values coerce; strings like `"NaN"` or `"1e999"` stay strings
/// and fail the structural pass as non-numbers.
fn coerce_numeric_strings(value: &Value) -> Value {
    match value {
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite())
            .and_then(Number::from_f64)
            .map_or_else(|| value.clone(), Value::Number),
        Value::Object(entries) => Value::Object(
            entries.iter().map(|(key, entry)| (key.clone(), coerce_numeric_strings(entry))).collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(coerce_numeric_strings).collect()),
        _ => value.clone(),
    }
}

/// Converts a schema violation into a collected field error.
fn field_error(error: &jsonschema::ValidationError<'_>) -> FieldError {
    let pointer = error.instance_path().to_string();
    let path = pointer.trim_start_matches('/').replace('/', ".");
    FieldError {
        path,
        message: error.to_string(),
    }
}
