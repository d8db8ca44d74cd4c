//! Input cleanup: normalizing raw candidate strings towards the bare
//! 10-digit form.
//!
//! Two strategies with different appetites: [`clean_kennitala_careful`]
//! only collapses a single well-placed separator, while
//! [`clean_kennitala_aggressive`] strips everything that is safe to strip.
//! Both are total functions and never fail.

use std::sync::OnceLock;

use regex::Regex;

/// ASCII digit classes are used throughout instead of `\d`/`\D` so that
/// Unicode digits never pass the shape gate.
fn careful_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]{6})\s?[-–]?\s?([0-9]{4})$").expect("valid pattern")
    })
}

fn leading_junk_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^0-9]+").expect("valid pattern"))
}

fn trailing_junk_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9]+$").expect("valid pattern"))
}

fn separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Spaces, hyphens and en-dashes only. Em-dash is not a separator.
    RE.get_or_init(|| Regex::new(r"[\s\-–]").expect("valid pattern"))
}

/// Trims the string, then collapses it to the bare 10 digits only if it
/// matches exactly "6 digits, optional space, optional dash or en-dash,
/// optional space, 4 digits". Anything else is returned trimmed but
/// otherwise unchanged, so malformed separators stay visible to the caller.
pub fn clean_kennitala_careful(value: &str) -> String {
    let trimmed = value.trim();
    match careful_re().captures(trimmed) {
        Some(caps) => format!("{}{}", &caps[1], &caps[2]),
        None => trimmed.to_string(),
    }
}

/// Aggressively strips away ALL spaces, hyphens and en-dashes, as well as
/// any leading and trailing non-digit gunk.
///
/// Other interior non-digit characters are left untouched, and no length
/// constraint is enforced. This is a best-effort normalizer, not a
/// validator.
pub fn clean_kennitala_aggressive(value: &str) -> String {
    let s = leading_junk_re().replace(value, "");
    let s = trailing_junk_re().replace(&s, "");
    separator_re().replace_all(&s, "").into_owned()
}

/// Careful-cleans the input and returns it only if the result is exactly
/// 10 ASCII digits. The shared first gate of the formatter, the date
/// interpreter and the parser.
pub(crate) fn clean_if_kt_shaped(value: &str) -> Option<String> {
    let cleaned = clean_kennitala_careful(value);
    (cleaned.len() == 10 && cleaned.bytes().all(|b| b.is_ascii_digit())).then_some(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_careful_collapses_well_placed_separators() {
        assert_eq!(clean_kennitala_careful(" 123456-7890"), "1234567890");
        assert_eq!(clean_kennitala_careful("123456 7890 "), "1234567890");
        assert_eq!(clean_kennitala_careful(" 123456 - 7890"), "1234567890");
        assert_eq!(clean_kennitala_careful("123456 -7890"), "1234567890");
        assert_eq!(clean_kennitala_careful("123456–7890"), "1234567890");
    }

    #[test]
    fn test_careful_leaves_malformed_input_alone() {
        // Too much internal spacing
        assert_eq!(
            clean_kennitala_careful("101275   - 5239"),
            "101275   - 5239"
        );
        // Trims only
        assert_eq!(clean_kennitala_careful(" abc "), "abc");
        assert_eq!(clean_kennitala_careful("kt. 123456-7890"), "kt. 123456-7890");
        assert_eq!(clean_kennitala_careful(" 1234-567890"), "1234-567890");
        assert_eq!(clean_kennitala_careful("123 456-7890"), "123 456-7890");
        // Em-dash is not a separator
        assert_eq!(clean_kennitala_careful("101275—5239"), "101275—5239");
    }

    #[test]
    fn test_aggressive_strips_separators_and_gunk() {
        assert_eq!(clean_kennitala_aggressive(" 123456-7890"), "1234567890");
        assert_eq!(clean_kennitala_aggressive("123456 7890 "), "1234567890");
        assert_eq!(clean_kennitala_aggressive(" 123456 - 7890"), "1234567890");
        assert_eq!(clean_kennitala_aggressive("123456 -7890"), "1234567890");
        assert_eq!(clean_kennitala_aggressive(" 12 34 56 - 78 90"), "1234567890");
        assert_eq!(clean_kennitala_aggressive("1-2-3 4-5 6-7-8 9-0"), "1234567890");
        assert_eq!(clean_kennitala_aggressive("(kt. 123456-7890)"), "1234567890");
    }

    #[test]
    fn test_aggressive_enforces_no_length_constraint() {
        assert_eq!(clean_kennitala_aggressive("(s. 765 4321) "), "7654321");
    }

    #[test]
    fn test_aggressive_leaves_interior_non_digits() {
        assert_eq!(
            clean_kennitala_aggressive("(kt. 123456-7890, s. 765 4321) "),
            "1234567890,s.7654321"
        );
    }

    #[test]
    fn test_aggressive_rejects_em_dash() {
        assert_eq!(clean_kennitala_aggressive("101275—5239"), "101275—5239");
    }

    #[test]
    fn test_shape_gate() {
        assert_eq!(clean_if_kt_shaped("101275-5239"), Some("1012755239".into()));
        assert_eq!(clean_if_kt_shaped(" 1012755239 "), Some("1012755239".into()));
        assert_eq!(clean_if_kt_shaped("101275-52"), None);
        assert_eq!(clean_if_kt_shaped("bogus"), None);
        assert_eq!(clean_if_kt_shaped(""), None);
    }
}
