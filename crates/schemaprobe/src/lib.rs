//! # schemaprobe — Two Calling Conventions, One Verdict
//!
//! Validates a record against a declarative shape description through the
//! two API surfaces of the `jsonschema` crate and reports a structured
//! [`Verdict`] either way.
//!
//! ## The two conventions
//!
//! - [`compiled`] — build a reusable `jsonschema::Validator` once, then
//!   validate through its instance methods. The verdict aggregates every
//!   violation.
//! - [`oneoff`] — call the module-level free functions
//!   (`jsonschema::is_valid`, `jsonschema::validate`) with the shape and
//!   the candidate value directly. No compilation step; the verdict
//!   carries at most the first violation.
//!
//! Both conventions must agree on the success flag for any shape/value
//! pair; the integration tests assert exactly that.
//!
//! ## Crate Policy
//!
//! - Shape descriptions are plain JSON Schema documents built by the
//!   [`shape`] builders. Validation semantics live entirely in the
//!   `jsonschema` crate; this crate only invokes them and reads verdicts.
//! - No parsing/deserialization layer: candidate values are
//!   `serde_json::Value`, verdicts are success flag plus violations.

pub mod compiled;
pub mod oneoff;
pub mod shape;
pub mod verdict;

pub use compiled::ShapeError;
pub use verdict::{Verdict, Violation};
