//! # Fruit — Single Source of Truth for the Permitted Literals
//!
//! Defines the `Fruit` enum with the three permitted wire literals. This
//! is the ONE definition of the closed set. Every `match` on `Fruit` must
//! be exhaustive — adding a literal forces every consumer to handle it at
//! compile time.
//!
//! Construction from untrusted input goes through [`FromStr`]; there is no
//! path to a `Fruit` holding a string outside the permitted set.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FruitParseError;

/// The closed set of fruit values a record may carry.
///
/// Wire form is the lowercase literal: `"apple"`, `"orange"`, `"banana"`.
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fruit {
    /// `"apple"`.
    Apple,
    /// `"orange"`.
    Orange,
    /// `"banana"`.
    Banana,
}

/// Total number of permitted fruit literals. Used for compile-time assertions.
pub const FRUIT_COUNT: usize = 3;

impl Fruit {
    /// Returns all permitted fruits in canonical order.
    pub fn all_fruits() -> &'static [Fruit] {
        &[Self::Apple, Self::Orange, Self::Banana]
    }

    /// Returns the lowercase wire literal for this fruit.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apple => "apple",
            Self::Orange => "orange",
            Self::Banana => "banana",
        }
    }

    /// Re-runs the parser on this value's wire literal.
    ///
    /// For a value of this type the check cannot fail — the sum type
    /// admits only permitted literals — but the operation is part of the
    /// public contract so callers can assert the parse invariant the same
    /// way record validation does.
    ///
    /// # Errors
    ///
    /// Returns [`FruitParseError`] if the stored literal is not permitted.
    pub fn validate(&self) -> Result<(), FruitParseError> {
        Self::from_str(self.as_str()).map(|_| ())
    }
}

impl std::fmt::Display for Fruit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fruit {
    type Err = FruitParseError;

    /// Parse a fruit from its lowercase wire literal.
    ///
    /// Accepts the same literals produced by [`Fruit::as_str()`], exactly
    /// and case-sensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apple" => Ok(Self::Apple),
            "orange" => Ok(Self::Orange),
            "banana" => Ok(Self::Banana),
            other => Err(FruitParseError {
                input: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fruits_count() {
        assert_eq!(Fruit::all_fruits().len(), FRUIT_COUNT);
        assert_eq!(Fruit::all_fruits().len(), 3);
    }

    #[test]
    fn test_all_fruits_unique() {
        let fruits = Fruit::all_fruits();
        let mut seen = std::collections::HashSet::new();
        for f in fruits {
            assert!(seen.insert(f), "Duplicate fruit: {f}");
        }
    }

    #[test]
    fn test_as_str_roundtrip() {
        for fruit in Fruit::all_fruits() {
            let s = fruit.as_str();
            let parsed: Fruit = s
                .parse()
                .unwrap_or_else(|e| panic!("Failed to parse {s:?}: {e}"));
            assert_eq!(*fruit, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("appleWithTypo".parse::<Fruit>().is_err());
        assert!("Apple".parse::<Fruit>().is_err()); // case-sensitive
        assert!("APPLE".parse::<Fruit>().is_err());
        assert!("".parse::<Fruit>().is_err());
    }

    #[test]
    fn test_from_str_error_carries_input() {
        let err = "appleWithTypo"
            .parse::<Fruit>()
            .expect_err("typo must not parse");
        assert_eq!(err.input, "appleWithTypo");
        assert!(err.to_string().contains("appleWithTypo"));
    }

    #[test]
    fn test_validate_succeeds_for_all() {
        for fruit in Fruit::all_fruits() {
            fruit.validate().expect("permitted literal must validate");
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        for fruit in Fruit::all_fruits() {
            let json = serde_json::to_string(fruit).unwrap();
            let parsed: Fruit = serde_json::from_str(&json).unwrap();
            assert_eq!(*fruit, parsed);
        }
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for fruit in Fruit::all_fruits() {
            let json = serde_json::to_string(fruit).unwrap();
            let expected = format!("\"{}\"", fruit.as_str());
            assert_eq!(json, expected);
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        for fruit in Fruit::all_fruits() {
            assert_eq!(fruit.to_string(), fruit.as_str());
        }
    }

    #[test]
    fn test_exhaustive_match_compiles() {
        // This test ensures that adding a new literal causes a compile
        // error here, forcing the developer to update all match arms.
        fn fruit_description(f: &Fruit) -> &'static str {
            match f {
                Fruit::Apple => "a pome",
                Fruit::Orange => "a citrus",
                Fruit::Banana => "a berry, botanically",
            }
        }
        for f in Fruit::all_fruits() {
            assert!(!fruit_description(f).is_empty());
        }
    }
}
