//! Vehicle plate validation.
//!
//! Two shapes are accepted, both anchored to the whole input:
//!
//! - Legacy: three uppercase letters, an optional hyphen, four digits
//!   (`ABC1234`, `ABC-1234`)
//! - Mercosul: three uppercase letters, a digit, an uppercase letter, two
//!   digits (`ABC1D23`)
//!
//! Matching is exact: no case folding, no whitespace trimming.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// The plate scheme a value matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlateFormat {
    /// Pre-Mercosul shape: three letters, optional hyphen, four digits.
    Legacy,
    /// Mercosul shape: three letters, digit, letter, two digits.
    Mercosul,
}

/// Validates a vehicle plate string.
pub fn validate_plate(plate: &str) -> Result<(), ValidationError> {
    Plate::parse(plate).map(|_| ())
}

/// Returns true if the plate is valid.
///
/// The failure reason is deliberately discarded; use [`validate_plate`] to
/// learn why a value was rejected.
#[must_use]
pub fn is_plate_valid(plate: &str) -> bool {
    validate_plate(plate).is_ok()
}

/// A validated vehicle plate.
///
/// Keeps the exact accepted input (including the optional legacy hyphen)
/// together with the shape it matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plate {
    value: String,
    format: PlateFormat,
}

impl Plate {
    /// Parses and validates a plate from a string.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let Some(format) = classify(s) else {
            return Err(ValidationError::InvalidPlate {
                value: s.to_string(),
            });
        };

        Ok(Self {
            value: s.to_string(),
            format,
        })
    }

    /// Returns the plate exactly as it was accepted.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the shape this plate matched.
    #[must_use]
    pub const fn format(&self) -> PlateFormat {
        self.format
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Plate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Plate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> serde::Deserialize<'de> for Plate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Classifies a plate against the two accepted shapes.
///
/// Both shapes are ASCII-only, so matching over bytes is exact and cannot
/// split a multi-byte character.
fn classify(plate: &str) -> Option<PlateFormat> {
    let bytes = plate.as_bytes();
    if bytes.len() < 7 {
        return None;
    }
    let (prefix, tail) = bytes.split_at(3);
    if !prefix.iter().all(u8::is_ascii_uppercase) {
        return None;
    }

    // Mercosul tail: digit, letter, digit, digit.
    if let [a, b, c, d] = tail {
        if a.is_ascii_digit() && b.is_ascii_uppercase() && c.is_ascii_digit() && d.is_ascii_digit()
        {
            return Some(PlateFormat::Mercosul);
        }
    }

    // Legacy tail: optional hyphen, then exactly four digits.
    let digits = tail.strip_prefix(b"-").unwrap_or(tail);
    if digits.len() == 4 && digits.iter().all(u8::is_ascii_digit) {
        return Some(PlateFormat::Legacy);
    }

    None
}
