//! # Validation Verdicts
//!
//! The outcome of validating one candidate value against one shape
//! description: a boolean success flag plus structured violation detail.

use std::fmt;

/// A single validation violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the candidate value.
    pub instance_path: String,
    /// JSON Pointer path within the shape that triggered the violation.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// The result of one validation call.
///
/// `success()` is true exactly when `violations()` is empty. How many
/// violations a failing verdict carries depends on the calling convention
/// that produced it: the compiled convention aggregates all of them, the
/// one-off convention reports only the first.
#[derive(Debug, Clone)]
pub struct Verdict {
    violations: Vec<Violation>,
}

impl Verdict {
    /// A passing verdict.
    pub(crate) fn pass() -> Self {
        Self { violations: Vec::new() }
    }

    /// A failing verdict carrying the given violations.
    pub(crate) fn fail(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// Whether the candidate value conformed to the shape.
    pub fn success(&self) -> bool {
        self.violations.is_empty()
    }

    /// All recorded violations; empty on success.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner violation list.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success() {
            return write!(f, "ok");
        }
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
