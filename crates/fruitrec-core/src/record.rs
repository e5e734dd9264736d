//! # Fruit Record — Wire Shape
//!
//! The record as it crosses the JSON boundary. The `fruit` and `owner`
//! fields stay raw strings after decode so that a missing key or an
//! unknown literal produces a value that validation can inspect and
//! reject with a field name, rather than a decode failure. Domain rules
//! live in [`crate::validate`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FruitParseError;
use crate::fruit::Fruit;

/// A fruit record: one enumeration field, one required free-text field,
/// one optional free-text field.
///
/// Field declaration order is the wire order. `description` is omitted
/// entirely from encoded output when absent, never emitted as `null`.
///
/// # Invariants
///
/// A record is valid if and only if `fruit` holds a permitted literal and
/// `owner` is non-empty. Decode does not enforce either constraint; run
/// [`crate::validate::RecordValidator::validate`] after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitRecord {
    /// Raw fruit literal. A key missing from the input decodes to the
    /// empty string, which no permitted literal matches.
    #[serde(default)]
    pub fruit: String,

    /// Owner of the record. Required: validation rejects the empty string.
    #[serde(default)]
    pub owner: String,

    /// Optional free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FruitRecord {
    /// Build a record from an already-parsed fruit.
    ///
    /// The stored literal is the fruit's wire form, so the result passes
    /// validation whenever `owner` is non-empty.
    pub fn new(fruit: Fruit, owner: impl Into<String>) -> Self {
        Self {
            fruit: fruit.as_str().to_string(),
            owner: owner.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Typed view of the raw `fruit` field, re-running the parser.
    ///
    /// Decode does not enforce enum membership, so this can fail for a
    /// record built from untrusted input.
    ///
    /// # Errors
    ///
    /// Returns [`FruitParseError`] if the stored string is not a
    /// permitted literal.
    pub fn parse_fruit(&self) -> Result<Fruit, FruitParseError> {
        Fruit::from_str(&self.fruit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_wire_literal() {
        let record = FruitRecord::new(Fruit::Apple, "John");
        assert_eq!(record.fruit, "apple");
        assert_eq!(record.owner, "John");
        assert_eq!(record.description, None);
    }

    #[test]
    fn test_with_description() {
        let record = FruitRecord::new(Fruit::Banana, "John").with_description("a ripe one");
        assert_eq!(record.description.as_deref(), Some("a ripe one"));
    }

    #[test]
    fn test_parse_fruit_on_constructed_record() {
        for fruit in Fruit::all_fruits() {
            let record = FruitRecord::new(*fruit, "John");
            assert_eq!(record.parse_fruit().unwrap(), *fruit);
        }
    }

    #[test]
    fn test_parse_fruit_on_raw_record() {
        let record = FruitRecord {
            fruit: "appleWithTypo".to_string(),
            owner: "John".to_string(),
            description: None,
        };
        let err = record.parse_fruit().expect_err("typo must not parse");
        assert_eq!(err.input, "appleWithTypo");
    }

    #[test]
    fn test_missing_keys_decode_to_zero_values() {
        let record: FruitRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.fruit, "");
        assert_eq!(record.owner, "");
        assert_eq!(record.description, None);
    }
}
