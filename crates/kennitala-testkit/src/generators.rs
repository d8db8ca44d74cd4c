//! Proptest strategies for property-based testing.
//!
//! Validity-preserving strategies are built on the library's own seedable
//! generator, so every shrink step stays a valid kennitala.

use chrono::NaiveDate;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use kennitala::{generate_kennitala_from, GenerateOptions, Kennitala, KennitalaType};

/// Generate a birth date inside the person window (1800..=2099).
pub fn person_birth_date() -> impl Strategy<Value = NaiveDate> {
    (1800i32..=2099, 1u32..=365).prop_map(|(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal).expect("ordinal 1..=365 is valid in every year")
    })
}

/// Generate a founding date inside the company window (1969..=2099).
pub fn company_birth_date() -> impl Strategy<Value = NaiveDate> {
    (1969i32..=2099, 1u32..=365).prop_map(|(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal).expect("ordinal 1..=365 is valid in every year")
    })
}

/// Generate a valid permanent person kennitala.
pub fn person_kennitala() -> impl Strategy<Value = Kennitala> {
    (any::<u64>(), person_birth_date()).prop_map(|(seed, birth_date)| {
        generate_kennitala_from(
            &mut StdRng::seed_from_u64(seed),
            &GenerateOptions {
                birth_date: Some(birth_date),
                ..GenerateOptions::default()
            },
        )
    })
}

/// Generate a valid company kennitala.
pub fn company_kennitala() -> impl Strategy<Value = Kennitala> {
    (any::<u64>(), company_birth_date()).prop_map(|(seed, birth_date)| {
        generate_kennitala_from(
            &mut StdRng::seed_from_u64(seed),
            &GenerateOptions {
                kind: Some(KennitalaType::Company),
                birth_date: Some(birth_date),
                ..GenerateOptions::default()
            },
        )
    })
}

/// Generate a temporary "kerfiskennitala".
pub fn temporary_kennitala() -> impl Strategy<Value = Kennitala> {
    any::<u64>().prop_map(|seed| {
        generate_kennitala_from(
            &mut StdRng::seed_from_u64(seed),
            &GenerateOptions {
                temporary: true,
                ..GenerateOptions::default()
            },
        )
    })
}

/// Generate one of the Gervimaður kennitalas.
pub fn robot_kennitala() -> impl Strategy<Value = Kennitala> {
    any::<u64>().prop_map(|seed| {
        generate_kennitala_from(
            &mut StdRng::seed_from_u64(seed),
            &GenerateOptions {
                robot: true,
                ..GenerateOptions::default()
            },
        )
    })
}

/// Generate any kennitala accepted by the default parser options.
pub fn valid_kennitala() -> impl Strategy<Value = Kennitala> {
    prop_oneof![
        person_kennitala(),
        company_kennitala(),
        temporary_kennitala(),
    ]
}
