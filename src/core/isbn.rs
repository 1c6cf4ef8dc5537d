//! ISBN-13 validation.

use crate::utils::error::{ResolverError, Result};
use serde::Serialize;
use std::fmt;

const ISBN13_LEN: usize = 13;
const BOOKLAND_PREFIXES: [&str; 2] = ["978", "979"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Length(usize),
    NonDigit,
    Prefix,
    Checksum { expected: u32, actual: u32 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Length(len) => write!(f, "expected 13 characters, got {}", len),
            Rejection::NonDigit => f.write_str("contains non-digit characters"),
            Rejection::Prefix => f.write_str("prefix must be 978 or 979"),
            Rejection::Checksum { expected, actual } => {
                write!(f, "check digit is {}, expected {}", actual, expected)
            }
        }
    }
}

/// Check digit for the first 12 digits: weights alternate 1, 3 from index 0.
fn check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .take(12)
        .enumerate()
        .map(|(index, digit)| if index % 2 == 0 { *digit } else { digit * 3 })
        .sum();
    (10 - sum % 10) % 10
}

fn inspect(code: &str) -> std::result::Result<(), Rejection> {
    // Character count, so multibyte input reports a sensible length.
    let len = code.chars().count();
    if len != ISBN13_LEN {
        return Err(Rejection::Length(len));
    }

    // to_digit(10) accepts ASCII 0-9 only; full-width digits are rejected
    let digits: Vec<u32> = code
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<_>>()
        .ok_or(Rejection::NonDigit)?;

    if !BOOKLAND_PREFIXES.iter().any(|prefix| code.starts_with(prefix)) {
        return Err(Rejection::Prefix);
    }

    let expected = check_digit(&digits);
    let actual = digits[12];
    if expected != actual {
        return Err(Rejection::Checksum { expected, actual });
    }
    Ok(())
}

/// Returns true if `code` is a structurally valid ISBN-13 with a correct
/// check digit.
pub fn is_valid_isbn13(code: &str) -> bool {
    inspect(code).is_ok()
}

/// A validated ISBN-13.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    pub fn parse(code: &str) -> Result<Self> {
        inspect(code)
            .map(|()| Isbn(code.to_string()))
            .map_err(|rejection| ResolverError::InvalidIsbn {
                value: code.to_string(),
                reason: rejection.to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Isbn {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self> {
        Isbn::parse(s)
    }
}
