//! Cosmetic formatting of kennitala-shaped strings.

use crate::clean::clean_if_kt_shaped;

/// Inserts `separator` before the last four digits. The input must already
/// be exactly 10 digits.
pub(crate) fn insert_separator(digits: &str, separator: &str) -> String {
    debug_assert_eq!(digits.len(), 10);
    format!("{}{}{}", &digits[..6], separator, &digits[6..])
}

/// Runs minimal cleanup on the input and, if it is kennitala-shaped,
/// inserts a `-` before the last four digits.
///
/// Falls back to returning the input untouched if it isn't roughly
/// kennitala-shaped. Purely cosmetic; performs no validation.
pub fn format_kennitala(value: &str) -> String {
    format_kennitala_with(value, "-")
}

/// Same as [`format_kennitala`] with a custom separator.
pub fn format_kennitala_with(value: &str, separator: &str) -> String {
    match clean_if_kt_shaped(value) {
        Some(cleaned) => insert_separator(&cleaned, separator),
        None => value.to_string(),
    }
}
