//! Known-good and known-bad kennitala fixtures.
//!
//! Shared by unit, integration and property tests. The Gervimaður values
//! are the published testing kennitalas; the rest are synthetic.

/// Checksum- and date-valid person kennitalas (permanent, non-robot).
pub const VALID_PERSONS: [&str; 2] = ["1012755239", "1012755238"];

/// Valid company kennitalas.
pub const VALID_COMPANIES: [&str; 1] = ["5001012880"];

/// Structurally valid temporary "kerfiskennitala" values.
pub const VALID_TEMPORARIES: [&str; 3] = ["8123456793", "8000000000", "9999999999"];

/// The full published set of fictitious "Gervimaður" kennitalas.
pub const ROBOTS: [&str; 14] = [
    "0101302129",
    "0101302209",
    "0101302399",
    "0101302479",
    "0101302559",
    "0101302639",
    "0101302719",
    "0101302989",
    "0101303019",
    "0101303369",
    "0101304339",
    "0101304929",
    "0101305069",
    "0101307789",
];

/// 10-digit strings that fail validation: bad checksum, impossible dates,
/// or both.
pub const INVALID_TEN_DIGIT: [&str; 5] = [
    "1212657890", // checksum failure
    "1012755249", // corrupted check digit
    "3368492689", // checksum-valid, day 33
    "7368492689", // day 73
    "1013755239", // month 13
];

/// Inputs that are not kennitala-shaped at all.
pub const MALFORMED: [&str; 6] = [
    "",
    "bogus",
    "10127552",
    " 10-1275-52 39",
    "101275   - 5239",
    "101275—5239", // em-dash
];
