//! Structural checks shared by the parser: checksum, date plausibility,
//! the Gervimaður table, and the fast first-digit discriminators.

use std::sync::OnceLock;

use regex::Regex;

/// Per-position weights for the modulo-11 checksum over the first 9 digits.
pub(crate) const CHECKSUM_WEIGHTS: [u32; 9] = [3, 2, 7, 6, 5, 4, 3, 2, 1];

/// The published middle segments of the fictitious "Gervimaður" test
/// kennitalas. All share the prefix `010130` and the suffix `9`.
pub(crate) const ROBOT_MIDDLES: [u16; 14] = [
    212, 220, 239, 247, 255, 263, 271, 298, 301, 336, 433, 492, 506, 778,
];

fn robot_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let middles = ROBOT_MIDDLES.map(|n| n.to_string()).join("|");
        Regex::new(&format!("^010130({middles})9$")).expect("valid pattern")
    })
}

/// Is this 10-digit string one of the known Gervimaður kennitalas?
pub(crate) fn is_robot_kennitala(value: &str) -> bool {
    robot_re().is_match(value)
}

/// Coarse day/month/century plausibility filter over the digit string.
///
/// Admits day 01-31 (41-71 for companies), month 01-12 with a leading-zero
/// slot that also admits 00, and a final century digit in {8, 9, 0}. This
/// trades a few false positives (a value starting "310290…", i.e. Feb
/// 31st, will pass) for a single cheap pattern match; exact calendar
/// checking is the opt-in strict mode.
pub(crate) fn has_plausible_date(value: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[012456][0-9]|[37][01])(?:0[0-9]|1[012]).+[890]$")
            .expect("valid pattern")
    })
    .is_match(value)
}

/// Does the weighted digit sum check out? Expects exactly 10 ASCII digits.
pub(crate) fn has_valid_checksum(value: &str) -> bool {
    let sum: u32 = value
        .bytes()
        .zip(CHECKSUM_WEIGHTS)
        .map(|(b, weight)| weight * u32::from(b - b'0'))
        .sum();
    sum % 11 == 0
}

/// Quickly detects whether an already-validated kennitala belongs to a
/// person (including temporary "kerfiskennitala" holders).
///
/// Checks only the first character: O(1), no cleaning, no validation.
/// The answer is meaningless for unvalidated input: a leading space makes
/// every discriminator return `false`.
pub fn is_person_kennitala(value: &str) -> bool {
    matches!(value.as_bytes().first(), Some(b'0'..=b'3' | b'8' | b'9'))
}

/// Quickly detects whether an already-validated kennitala belongs to a
/// company. Same caveats as [`is_person_kennitala`].
pub fn is_company_kennitala(value: &str) -> bool {
    matches!(value.as_bytes().first(), Some(b'4'..=b'7'))
}

/// Quickly detects whether an already-validated kennitala is a temporary
/// "kerfiskennitala" (a subset of person kennitalas). Same caveats as
/// [`is_person_kennitala`].
pub fn is_temp_kennitala(value: &str) -> bool {
    matches!(value.as_bytes().first(), Some(b'8' | b'9'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_accepts_known_valid_values() {
        assert!(has_valid_checksum("1012755239"));
        assert!(has_valid_checksum("1012755238"));
        assert!(has_valid_checksum("5001012880"));
        assert!(has_valid_checksum("0101307789"));
    }

    #[test]
    fn test_checksum_rejects_corrupted_values() {
        assert!(!has_valid_checksum("1212657890"));
        // Every single-digit corruption of the check digit fails
        for digit in b'0'..=b'9' {
            if digit == b'3' {
                continue;
            }
            let mut bytes = *b"1012755239";
            bytes[8] = digit;
            let corrupted = std::str::from_utf8(&bytes).unwrap().to_string();
            assert!(!has_valid_checksum(&corrupted), "{corrupted}");
        }
    }

    #[test]
    fn test_robot_table() {
        assert!(is_robot_kennitala("0101307789"));
        assert!(is_robot_kennitala("0101302129"));
        assert!(is_robot_kennitala("0101302399"));
        // Same date, non-listed middle
        assert!(!is_robot_kennitala("0101302139"));
        assert!(!is_robot_kennitala("1012755239"));
    }

    #[test]
    fn test_plausibility_filter() {
        assert!(has_plausible_date("1012755239"));
        assert!(has_plausible_date("5001012880"));
        // Feb 31st, the documented false positive
        assert!(has_plausible_date("3102901239"));
        // Day 33
        assert!(!has_plausible_date("3368492689"));
        // Day 73
        assert!(!has_plausible_date("7368492689"));
        // Month 13
        assert!(!has_plausible_date("1013755239"));
        // Century digit outside {8, 9, 0}
        assert!(!has_plausible_date("1012755235"));
        // Temporary values never look date-like
        assert!(!has_plausible_date("8123456793"));
    }

    #[test]
    fn test_discriminators_on_valid_values() {
        assert!(is_person_kennitala("1012755239"));
        assert!(!is_person_kennitala("5001012880"));
        assert!(is_person_kennitala("8123456793"));

        assert!(is_company_kennitala("5001012880"));
        assert!(!is_company_kennitala("1012755239"));
        assert!(!is_company_kennitala("8123456793"));

        assert!(is_temp_kennitala("8123456793"));
        assert!(!is_temp_kennitala("1012755239"));
        assert!(!is_temp_kennitala("5001012880"));
    }

    #[test]
    fn test_discriminators_do_not_clean_or_validate() {
        assert!(is_person_kennitala("2foobar"));
        assert!(!is_person_kennitala("5foobar"));
        assert!(!is_person_kennitala("foobar"));
        assert!(!is_person_kennitala(" 1012755239"));

        assert!(is_company_kennitala("5foobar"));
        assert!(!is_company_kennitala("2foobar"));
        assert!(!is_company_kennitala(" 5001012880"));

        assert!(is_temp_kennitala("8foobar"));
        assert!(!is_temp_kennitala(" 8123456793"));

        assert!(!is_person_kennitala(""));
        assert!(!is_company_kennitala(""));
        assert!(!is_temp_kennitala(""));
    }
}
