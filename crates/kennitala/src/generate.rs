//! Generating technically valid kennitalas (possibly real ones!).
//!
//! The generator is the structural inverse of the parser: every value it
//! returns passes [`is_valid_kennitala_with`] for the requested kind.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use rand::Rng;
use tracing::{debug, trace};

use crate::parse::{is_valid_kennitala_with, CleanMode, ParseOptions};
use crate::types::{Kennitala, KennitalaType};
use crate::validate::ROBOT_MIDDLES;

/// Options for [`generate_kennitala`].
///
/// `kind = Company` overrides both `robot` and `temporary`; `robot` and
/// `temporary` in turn ignore any supplied `birth_date`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// The kind of kennitala to generate. Defaults to person.
    pub kind: Option<KennitalaType>,
    /// Embed this birth date (founding date for companies). Dates outside
    /// 1800-01-01..=2099-12-31 (companies: 1969-01-01, their legal lower
    /// bound) are ignored and replaced with a random recent date.
    pub birth_date: Option<NaiveDate>,
    /// Generate one of the known "Gervimaður" testing kennitalas.
    pub robot: bool,
    /// Generate a temporary "kerfiskennitala".
    pub temporary: bool,
}

/// Generates a technically valid kennitala using the thread-local RNG.
pub fn generate_kennitala(opts: &GenerateOptions) -> Kennitala {
    generate_kennitala_from(&mut rand::thread_rng(), opts)
}

/// Generates a technically valid kennitala from the given RNG. A seeded
/// RNG plus an explicit `birth_date` yields a deterministic value.
pub fn generate_kennitala_from<R: Rng + ?Sized>(
    rng: &mut R,
    opts: &GenerateOptions,
) -> Kennitala {
    let is_company = opts.kind == Some(KennitalaType::Company);

    if !is_company {
        if opts.temporary {
            // Registry-assigned: a leading 8 or 9 and nine random digits,
            // with no checksum or date structure.
            let head = if rng.gen_bool(0.5) { '9' } else { '8' };
            let tail: String = (0..9)
                .map(|_| char::from(b'0' + rng.gen_range(0..10)))
                .collect();
            return Kennitala::from_validated(&format!("{head}{tail}"));
        }
        if opts.robot {
            let middle = ROBOT_MIDDLES[rng.gen_range(0..ROBOT_MIDDLES.len())];
            return Kennitala::from_validated(&format!("010130{middle}9"));
        }
    }

    let birth_date = match opts.birth_date.filter(|d| accepted_date(d, is_company)) {
        Some(date) => date,
        None => {
            if let Some(rejected) = opts.birth_date {
                debug!(%rejected, "birth date outside the accepted window, substituting");
            }
            random_recent_date(rng, is_company)
        }
    };

    let day_offset = if is_company { 40 } else { 0 };
    let ddmmyy = format!(
        "{:02}{:02}{:02}",
        birth_date.day() + day_offset,
        birth_date.month(),
        birth_date.year() % 100
    );
    let century_digit = (birth_date.year() / 100) % 10;

    let check_opts = ParseOptions {
        kind: opts.kind,
        clean: CleanMode::None,
        ..ParseOptions::default()
    };

    // Brute-force search for a middle segment and check digit that pass
    // validation. For a fixed 9-digit prefix exactly one check digit can
    // satisfy the weighted sum, and when the required value is the
    // excluded one (the sum would need an 11th digit) no candidate in the
    // inner loop passes and the middle segment is redrawn, so the search
    // terminates with probability 1 after a small number of draws.
    loop {
        let middle = if is_company {
            rng.gen_range(0..100)
        } else {
            // Persons avoid 00-19 to reduce collision with reserved ranges
            rng.gen_range(20..100)
        };
        for check_digit in 0..10 {
            let candidate = format!("{ddmmyy}{middle:02}{check_digit}{century_digit}");
            if is_valid_kennitala_with(&candidate, &check_opts) {
                return Kennitala::from_validated(&candidate);
            }
        }
        trace!(middle, "checksum excluded the drawn middle segment, redrawing");
    }
}

fn accepted_date(date: &NaiveDate, is_company: bool) -> bool {
    // Real company kennitalas happen to have a lower year boundary of 1969
    let min_year = if is_company { 1969 } else { 1800 };
    (min_year..=2099).contains(&date.year())
}

fn random_recent_date<R: Rng + ?Sized>(rng: &mut R, is_company: bool) -> NaiveDate {
    const YEAR_MS: i64 = 365 * 24 * 60 * 60 * 1000;
    let max_age_ms = (if is_company { 50 } else { 100 }) * YEAR_MS;
    let age = Duration::milliseconds(rng.gen_range(0..max_age_ms));
    (Utc::now() - age).date_naive()
}
