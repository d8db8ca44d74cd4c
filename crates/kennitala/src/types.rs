//! Strong types for validated kennitala values.
//!
//! A [`Kennitala`] can only be obtained through a path that has validated
//! the digits: the parser, the generator, the `FromStr`/`TryFrom`
//! conversions, or serde deserialization.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::date::kennitala_birth_date;
use crate::error::KennitalaError;
use crate::format::insert_separator;
use crate::parse::parse_kennitala;
use crate::validate::{is_company_kennitala, is_temp_kennitala};

/// The two kinds of kennitala holders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KennitalaType {
    /// A private individual, including temporary "kerfiskennitala" holders.
    Person,
    /// A legal entity.
    Company,
}

impl fmt::Display for KennitalaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KennitalaType::Person => f.write_str("person"),
            KennitalaType::Company => f.write_str("company"),
        }
    }
}

/// A validated 10-digit kennitala.
///
/// Immutable. The inner bytes are always exactly 10 ASCII digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kennitala([u8; 10]);

impl Kennitala {
    /// Wrap an already-validated 10-digit string. Callers must have run
    /// the value through the parser (or constructed it to satisfy the
    /// parser, as the generator does).
    pub(crate) fn from_validated(digits: &str) -> Self {
        let mut bytes = [0u8; 10];
        bytes.copy_from_slice(digits.as_bytes());
        Self(bytes)
    }

    /// The plain 10-digit string.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).expect("kennitala digits are ASCII")
    }

    /// The holder kind, derived from the first digit.
    pub fn kind(&self) -> KennitalaType {
        if self.0[0] > b'3' && self.0[0] < b'8' {
            KennitalaType::Company
        } else {
            KennitalaType::Person
        }
    }

    /// Is this a person kennitala (including temporary ones)?
    pub fn is_person(&self) -> bool {
        self.kind() == KennitalaType::Person
    }

    /// Is this a company kennitala?
    pub fn is_company(&self) -> bool {
        is_company_kennitala(self.as_str())
    }

    /// Is this a temporary "kerfiskennitala"?
    pub fn is_temporary(&self) -> bool {
        is_temp_kennitala(self.as_str())
    }

    /// The embedded birth date (founding date for companies). `None` for
    /// temporary kennitalas, which carry no date.
    pub fn birth_date(&self) -> Option<chrono::NaiveDate> {
        kennitala_birth_date(self.as_str())
    }

    /// Pretty-formatted rendering with a `-` before the last four digits.
    pub fn formatted(&self) -> String {
        self.formatted_with("-")
    }

    /// Pretty-formatted rendering with a custom separator.
    pub fn formatted_with(&self, separator: &str) -> String {
        insert_separator(self.as_str(), separator)
    }
}

impl fmt::Debug for Kennitala {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kennitala({})", self.as_str())
    }
}

impl fmt::Display for Kennitala {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Kennitala {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Kennitala> for String {
    fn from(kt: Kennitala) -> Self {
        kt.as_str().to_string()
    }
}

/// Parses with the default [`ParseOptions`]: careful cleaning, robots
/// rejected, temporary kennitalas accepted.
///
/// [`ParseOptions`]: crate::ParseOptions
impl FromStr for Kennitala {
    type Err = KennitalaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_kennitala(s)
            .map(|data| data.value)
            .ok_or_else(|| KennitalaError::Invalid(s.to_string()))
    }
}

impl TryFrom<&str> for Kennitala {
    type Error = KennitalaError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Kennitala {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Kennitala {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// The data object returned by a successful parse: the cleaned-up value
/// plus its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KennitalaData {
    /// The plain, cleaned-up 10-digit kennitala.
    pub value: Kennitala,
    /// Whether the kennitala belongs to a person or a company.
    pub kind: KennitalaType,
    /// Whether the kennitala is a known "Gervimaður" testing value.
    /// Always `false` for companies.
    pub robot: bool,
    /// Whether the kennitala is a temporary "kerfiskennitala".
    /// Only ever `true` for persons.
    pub temporary: bool,
}

impl KennitalaData {
    /// The plain 10-digit string.
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    /// Pretty-formatted rendering, computed on demand.
    pub fn formatted(&self) -> String {
        self.value.formatted()
    }
}

impl fmt::Display for KennitalaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
