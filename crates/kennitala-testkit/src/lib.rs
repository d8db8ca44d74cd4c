//! # Kennitala Testkit
//!
//! Testing utilities for the `kennitala` crate.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Known-good and known-bad kennitala values shared by tests
//! - **Generators**: Proptest strategies for property-based testing
//!
//! ## Fixtures
//!
//! ```rust
//! use kennitala::is_valid_kennitala;
//! use kennitala_testkit::fixtures::VALID_PERSONS;
//!
//! for value in VALID_PERSONS {
//!     assert!(is_valid_kennitala(value));
//! }
//! ```
//!
//! ## Property Testing
//!
//! The validity-preserving strategies wrap the library's seedable
//! generator:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use kennitala::is_valid_kennitala;
//! use kennitala_testkit::generators::valid_kennitala;
//!
//! proptest! {
//!     #[test]
//!     fn generated_values_validate(kt in valid_kennitala()) {
//!         prop_assert!(is_valid_kennitala(kt.as_str()));
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use generators::{
    company_kennitala, person_kennitala, robot_kennitala, temporary_kennitala, valid_kennitala,
};
