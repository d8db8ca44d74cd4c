//! The parsing/validation pipeline.
//!
//! Every rejection (malformed input, bad checksum, filtered kind)
//! collapses into the same `None`. This is a low-stakes check-fast filter
//! meant to catch obvious mistakes early, not an authority on who exists;
//! any real-stakes filtering must happen against the registry anyway.

use std::borrow::Cow;

use crate::clean::{clean_kennitala_aggressive, clean_kennitala_careful};
use crate::date::kennitala_birth_date;
use crate::types::{Kennitala, KennitalaData, KennitalaType};
use crate::validate::{has_plausible_date, has_valid_checksum, is_robot_kennitala};

/// How much cleanup to run on the input before parsing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanMode {
    /// No cleanup whatsoever, not even trimming.
    None,
    /// Trim, and collapse a single well-placed space/dash separator.
    #[default]
    Careful,
    /// Strip all spaces and dashes plus leading/trailing non-digit gunk.
    Aggressive,
}

/// Options for [`parse_kennitala_with`] and [`is_valid_kennitala_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Only accept kennitalas of this kind. `None` accepts both.
    pub kind: Option<KennitalaType>,
    /// Accept the known "Gervimaður" testing kennitalas. Default: reject.
    pub robot: bool,
    /// Reject temporary "kerfiskennitala" values. Default: accept, since
    /// they are, by definition, valid kennitalas of real people.
    pub reject_temporary: bool,
    /// Cleanup strategy. Defaults to [`CleanMode::Careful`].
    pub clean: CleanMode,
    /// Opt into exact calendar-date checking instead of the fast
    /// plausibility filter. The default may let a value starting with
    /// something subtly impossible like "310290…" (Feb 31st) through.
    pub strict_date: bool,
}

/// Parses a string as a kennitala with the default options: careful
/// cleaning, robots rejected, temporary values accepted, fast date check.
pub fn parse_kennitala(value: &str) -> Option<KennitalaData> {
    parse_kennitala_with(value, &ParseOptions::default())
}

/// Parses a string to see if it is a technically valid kennitala and
/// returns the cleaned-up value with its classification.
///
/// Returns `None` on any failure; malformed and merely-invalid input are
/// deliberately indistinguishable.
pub fn parse_kennitala_with(value: &str, opts: &ParseOptions) -> Option<KennitalaData> {
    if value.is_empty() {
        return None;
    }
    let cleaned: Cow<'_, str> = match opts.clean {
        CleanMode::None => Cow::Borrowed(value),
        CleanMode::Careful => Cow::Owned(clean_kennitala_careful(value)),
        CleanMode::Aggressive => Cow::Owned(clean_kennitala_aggressive(value)),
    };

    if cleaned.len() != 10 || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let first = cleaned.as_bytes()[0];

    // Kerfiskennitalas are registry-assigned, not date-derived: the nine
    // digits after the leading 8/9 are random, so neither the date filter
    // nor the checksum applies to them.
    if (first == b'8' || first == b'9')
        && !opts.reject_temporary
        && opts.kind != Some(KennitalaType::Company)
    {
        return Some(KennitalaData {
            value: Kennitala::from_validated(&cleaned),
            kind: KennitalaType::Person,
            robot: false,
            temporary: true,
        });
    }

    // Quickly weed out obviously non-date values. (Example of a
    // checksum-valid but nonsensical kennitala: "3368492689".)
    if !has_plausible_date(&cleaned) {
        return None;
    }
    // Optionally perform the slower, exact date check.
    if opts.strict_date && kennitala_birth_date(&cleaned).is_none() {
        return None;
    }

    let robot = is_robot_kennitala(&cleaned);
    if robot && !opts.robot {
        return None;
    }

    if !has_valid_checksum(&cleaned) {
        return None;
    }

    let kind = if first > b'3' {
        KennitalaType::Company
    } else {
        KennitalaType::Person
    };
    if opts.kind.is_some_and(|want| want != kind) {
        return None;
    }

    Some(KennitalaData {
        value: Kennitala::from_validated(&cleaned),
        kind,
        robot,
        temporary: false,
    })
}

/// Validates a string as a kennitala, performing **no cleanup**, unlike
/// the parser, which cleans carefully by default. Use
/// [`is_valid_kennitala_with`] to opt into cleaning.
pub fn is_valid_kennitala(value: &str) -> bool {
    is_valid_kennitala_with(
        value,
        &ParseOptions {
            clean: CleanMode::None,
            ..ParseOptions::default()
        },
    )
}

/// Validates a string as a kennitala under the given options.
pub fn is_valid_kennitala_with(value: &str, opts: &ParseOptions) -> bool {
    parse_kennitala_with(value, opts).is_some()
}
