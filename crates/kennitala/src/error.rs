//! Error type for the validating conversions.

use thiserror::Error;

/// Returned by `FromStr`/`TryFrom` conversions into [`Kennitala`] when the
/// input does not parse as a valid kennitala.
///
/// The parsing and validation entry points themselves
/// ([`parse_kennitala`], [`is_valid_kennitala`]) never produce this error;
/// they collapse malformed and invalid input into a single absent outcome.
///
/// [`Kennitala`]: crate::Kennitala
/// [`parse_kennitala`]: crate::parse_kennitala
/// [`is_valid_kennitala`]: crate::is_valid_kennitala
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KennitalaError {
    #[error("invalid kennitala: {0:?}")]
    Invalid(String),
}
