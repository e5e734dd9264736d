//! # fruitrec-core — Typed JSON Fruit Records
//!
//! A small, self-contained library for decoding JSON fruit records into
//! typed values, validating their field constraints explicitly, and
//! re-encoding them byte-for-byte. Everything here is a transient value
//! type: no I/O beyond an in-memory string, no shared mutable state.
//!
//! ## Key Design Principles
//!
//! 1. **Closed sum type for the literal set.** [`Fruit`] is an enum with an
//!    explicit parse function, not raw string comparison scattered across
//!    call sites. A constructed `Fruit` always holds a permitted literal.
//!
//! 2. **Decode enforces shape, validation enforces domain rules.** A missing
//!    or unknown `fruit` literal decodes fine and is rejected afterwards by
//!    [`RecordValidator`] with an error that names the violating field.
//!
//! 3. **Explicit validator value, not ambient global state.** Construct a
//!    [`RecordValidator`] once at startup and share the immutable instance;
//!    it is `Send + Sync`.
//!
//! 4. **Deterministic encoding.** Fields encode in declaration order with
//!    two-space pretty printing, the optional field omitted when absent, so
//!    `decode` followed by `encode` reproduces encoder-produced input
//!    byte-for-byte.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize` where they cross the wire.

pub mod codec;
pub mod error;
pub mod fruit;
pub mod record;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use codec::{decode, encode};
pub use error::{DecodeError, EncodeError, FruitParseError, FruitRecError};
pub use fruit::{Fruit, FRUIT_COUNT};
pub use record::FruitRecord;
pub use validate::{RecordValidationError, RecordValidator, Violation, Violations};
