//! # Codec — Structural Decode and Deterministic Encode
//!
//! JSON in, JSON out. Decode enforces shape only (string vs string,
//! optional-string vs absent); domain rules are validation's job. Encode
//! is deterministic: two-space pretty printing, fields in declaration
//! order, the optional field omitted when absent. Encoding a decoded
//! record therefore reproduces the original bytes whenever those bytes
//! came from this encoder.

use crate::error::{DecodeError, EncodeError};
use crate::record::FruitRecord;

/// Decode a JSON document into a record, enforcing shape only.
///
/// Unknown keys are ignored. Missing `fruit`/`owner` keys decode to empty
/// strings and a missing `description` decodes to `None`; neither is a
/// decode failure.
///
/// # Errors
///
/// Returns [`DecodeError`] for malformed JSON or a type mismatch, e.g. a
/// numeric `fruit`.
pub fn decode(json: &str) -> Result<FruitRecord, DecodeError> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a record as pretty-printed JSON with two-space indentation.
///
/// Field order is fixed: `fruit`, `owner`, then `description` (omitted
/// entirely when absent).
///
/// # Errors
///
/// Returns [`EncodeError`] if serialization fails.
pub fn encode(record: &FruitRecord) -> Result<String, EncodeError> {
    Ok(serde_json::to_string_pretty(record)?)
}
