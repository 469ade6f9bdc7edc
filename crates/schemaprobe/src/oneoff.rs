//! # One-Off Convention
//!
//! The free-function surface of the `jsonschema` crate: pass the shape
//! description and the candidate value to a module-level function, no
//! compilation step in sight. This is the analogue of a functional "mini"
//! API where `safeParse(schema, value)` is a free function rather than a
//! schema method.
//!
//! The underlying functions stop at the first violation, so failing
//! verdicts from this convention carry exactly one [`Violation`]. The
//! success flag always matches the compiled convention's.
//!
//! The module-level functions panic when handed a shape description that
//! is not a valid JSON Schema. Shapes built by [`crate::shape`] are always
//! valid; callers compiling untrusted shape documents should go through
//! [`crate::compiled`] instead, which surfaces that case as an error.

use serde_json::Value;

use crate::verdict::{Verdict, Violation};

/// The bare boolean form: does the candidate value conform to the shape?
pub fn is_valid(shape: &Value, value: &Value) -> bool {
    jsonschema::is_valid(shape, value)
}

/// Validate one candidate value against the shape, reporting the first
/// violation on failure.
pub fn safe_parse(shape: &Value, value: &Value) -> Verdict {
    match jsonschema::validate(shape, value) {
        Ok(()) => Verdict::pass(),
        Err(error) => {
            tracing::debug!("candidate value rejected");
            Verdict::fail(vec![Violation {
                instance_path: error.instance_path.to_string(),
                schema_path: error.schema_path.to_string(),
                message: error.to_string(),
            }])
        }
    }
}
