//! # Kennitala
//!
//! Validation, parsing, formatting, and generation of Icelandic national
//! identification numbers ("kennitala"), the 10-digit strings identifying
//! persons, companies, and temporary registrants.
//!
//! This crate is pure computation over strings: no I/O, no storage, no
//! networking, no shared mutable state. Every function is safe to call
//! concurrently.
//!
//! ## Key Types
//!
//! - [`Kennitala`] - A validated, immutable 10-digit value
//! - [`KennitalaData`] - The result of a successful parse: value plus
//!   classification
//! - [`KennitalaType`] - Person or company
//! - [`ParseOptions`] / [`GenerateOptions`] - Caller-supplied configuration
//!
//! ## Parsing
//!
//! [`parse_kennitala`] runs the full pipeline: cleanup, shape check,
//! temporary-ID fast path, date plausibility, Gervimaður filtering, the
//! modulo-11 checksum, and type classification. Every rejection is the
//! same `None`: this is a check-fast filter for catching obvious
//! mistakes, and deliberately does not explain itself.
//!
//! ```rust
//! use kennitala::{parse_kennitala, KennitalaType};
//!
//! let data = parse_kennitala("101275-5239").unwrap();
//! assert_eq!(data.as_str(), "1012755239");
//! assert_eq!(data.kind, KennitalaType::Person);
//! assert_eq!(data.formatted(), "101275-5239");
//! ```
//!
//! ## Generation
//!
//! [`generate_kennitala`] synthesizes values guaranteed to satisfy the
//! validator, useful for tests and demo data. Note that generated
//! values may collide with real kennitalas.
//!
//! ```rust
//! use kennitala::{generate_kennitala, is_valid_kennitala, GenerateOptions, KennitalaType};
//!
//! let kt = generate_kennitala(&GenerateOptions {
//!     kind: Some(KennitalaType::Company),
//!     ..GenerateOptions::default()
//! });
//! assert!(is_valid_kennitala(kt.as_str()));
//! ```

pub mod clean;
pub mod date;
pub mod error;
pub mod format;
pub mod generate;
pub mod parse;
pub mod types;
pub mod validate;

pub use clean::{clean_kennitala_aggressive, clean_kennitala_careful};
pub use date::kennitala_birth_date;
pub use error::KennitalaError;
pub use format::{format_kennitala, format_kennitala_with};
pub use generate::{generate_kennitala, generate_kennitala_from, GenerateOptions};
pub use parse::{
    is_valid_kennitala, is_valid_kennitala_with, parse_kennitala, parse_kennitala_with,
    CleanMode, ParseOptions,
};
pub use types::{Kennitala, KennitalaData, KennitalaType};
pub use validate::{is_company_kennitala, is_person_kennitala, is_temp_kennitala};
