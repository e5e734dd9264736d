//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the crate. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Decode errors surface immediately and are never recovered.
//! - Parse failures carry the offending input and are testable by type,
//!   not by message text.
//! - Validation errors name every violating field.
//!
//! Every error is terminal for the operation that raised it.

use thiserror::Error;

use crate::validate::RecordValidationError;

/// Top-level error type for the fruit record library.
#[derive(Error, Debug)]
pub enum FruitRecError {
    /// Structural JSON decode failure.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// JSON encode failure.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// A string did not match any permitted fruit literal.
    #[error("parse error: {0}")]
    Parse(#[from] FruitParseError),

    /// One or more record-level constraints unmet.
    #[error("validation error: {0}")]
    Validation(#[from] RecordValidationError),
}

/// Malformed JSON or a type mismatch during structural decode.
///
/// Decode enforces shape only (string vs string, optional-string vs
/// absent); domain-level constraints are [`RecordValidationError`]'s job.
#[derive(Error, Debug)]
#[error("malformed JSON: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// JSON serialization failed during encode.
///
/// Kept distinct from [`DecodeError`] so matching on the decode kind
/// stays precise.
#[derive(Error, Debug)]
#[error("serialization failed: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

/// A string did not match any permitted fruit literal.
///
/// This is the sentinel parse-failure kind. Callers test for it by type —
/// matching the [`FruitRecError::Parse`] variant or downcasting via
/// `Error::source()` — rather than by message text. The offending input
/// is carried for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to parse fruit from {input:?}")]
pub struct FruitParseError {
    /// The string that matched no permitted literal.
    pub input: String,
}
