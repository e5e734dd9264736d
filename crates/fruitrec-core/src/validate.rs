//! # Record Validation
//!
//! Explicit, statically-typed field checks, run after structural decode.
//!
//! Decode is a trust boundary for shape only; this module is where domain
//! rules are enforced. Records that fail validation are rejected with
//! structured error information naming every violating field, in field
//! declaration order.
//!
//! ## Thread Safety
//!
//! `RecordValidator` is immutable after construction and `Send + Sync`.
//! Construct it once at startup and share the instance freely across
//! threads.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::codec;
use crate::error::FruitRecError;
use crate::fruit::Fruit;
use crate::record::FruitRecord;

/// Error during record validation.
#[derive(Error, Debug)]
pub enum RecordValidationError {
    /// The record did not satisfy its field constraints.
    #[error("record validation failed:\n{violations}")]
    ValidationFailed {
        /// Structured list of individual violations.
        violations: Violations,
    },
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the violating field.
    pub field: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {}", self.field, self.message)
    }
}

/// Collection of validation violations, in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Validates decoded records against the domain rules.
///
/// The validator is an explicitly constructed, immutable value rather
/// than ambient global state: build it once, then share it. The permitted
/// fruit set is fixed at construction.
#[derive(Debug, Clone)]
pub struct RecordValidator {
    /// Permitted fruit literals, in canonical order.
    permitted: &'static [Fruit],
}

impl RecordValidator {
    /// Create a validator over the full permitted fruit set.
    pub fn new() -> Self {
        Self {
            permitted: Fruit::all_fruits(),
        }
    }

    /// Validate a decoded record.
    ///
    /// Checks, in field declaration order:
    ///
    /// 1. `fruit` must parse to a permitted literal. A key missing from
    ///    the input decoded to the empty string, which fails here.
    /// 2. `owner` must be non-empty.
    ///
    /// All failing fields are collected; the error message names each one.
    ///
    /// # Errors
    ///
    /// Returns [`RecordValidationError::ValidationFailed`] listing every
    /// violated field.
    pub fn validate(&self, record: &FruitRecord) -> Result<(), RecordValidationError> {
        let mut violations = Vec::new();

        match Fruit::from_str(&record.fruit) {
            Ok(fruit) if self.permitted.contains(&fruit) => {}
            Ok(fruit) => violations.push(Violation {
                field: "fruit".to_string(),
                message: format!("{fruit} is not a permitted literal"),
            }),
            Err(err) => violations.push(Violation {
                field: "fruit".to_string(),
                message: err.to_string(),
            }),
        }

        if record.owner.is_empty() {
            violations.push(Violation {
                field: "owner".to_string(),
                message: "required field is empty".to_string(),
            });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(RecordValidationError::ValidationFailed {
                violations: Violations { violations },
            })
        }
    }

    /// Decode a JSON document and validate the result in one step.
    ///
    /// # Errors
    ///
    /// Returns [`FruitRecError::Decode`] for malformed input and
    /// [`FruitRecError::Validation`] for a well-shaped record that
    /// violates the domain rules.
    pub fn decode_validated(&self, json: &str) -> Result<FruitRecord, FruitRecError> {
        let record = codec::decode(json)?;
        self.validate(&record)?;
        Ok(record)
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new()
    }
}
