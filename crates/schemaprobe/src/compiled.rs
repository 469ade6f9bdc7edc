//! # Compiled-Validator Convention
//!
//! The method-call surface of the `jsonschema` crate: compile the shape
//! description into a reusable [`Validator`] once, then validate candidate
//! values through its instance methods.
//!
//! This is the convention to prefer when the same shape is checked against
//! many values, since compilation happens once. It is also the only
//! convention with an error path of its own: a shape description that is
//! not a valid JSON Schema fails at compile time with
//! [`ShapeError::InvalidShape`] instead of panicking inside the library.
//!
//! Failing verdicts from this convention aggregate every violation found
//! in the candidate value, via [`Validator::iter_errors`].

use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

use crate::verdict::{Verdict, Violation};

/// Error while preparing a shape description for validation.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// The shape description is not a valid JSON Schema.
    #[error("shape description failed to compile: {reason}")]
    InvalidShape {
        /// Reason the shape could not be compiled.
        reason: String,
    },
}

/// Compile a shape description into a reusable validator.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidShape`] if the shape is not a valid
/// JSON Schema document.
pub fn compile(shape: &Value) -> Result<Validator, ShapeError> {
    jsonschema::validator_for(shape).map_err(|e| ShapeError::InvalidShape {
        reason: e.to_string(),
    })
}

/// Validate a candidate value through a compiled validator's instance
/// methods, collecting every violation.
pub fn safe_parse_with(validator: &Validator, value: &Value) -> Verdict {
    let violations: Vec<Violation> = validator
        .iter_errors(value)
        .map(|e| Violation {
            instance_path: e.instance_path.to_string(),
            schema_path: e.schema_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if violations.is_empty() {
        Verdict::pass()
    } else {
        tracing::debug!(count = violations.len(), "candidate value rejected");
        Verdict::fail(violations)
    }
}

/// Compile the shape and validate one candidate value against it.
///
/// Convenience composition of [`compile`] and [`safe_parse_with`] for
/// callers that validate a single value.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidShape`] if the shape cannot be compiled.
pub fn safe_parse(shape: &Value, value: &Value) -> Result<Verdict, ShapeError> {
    let validator = compile(shape)?;
    Ok(safe_parse_with(&validator, value))
}
