//! Student number - the 16-digit key every record is filed under

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Total number of digits in a student number
pub const STUDENT_NUMBER_LEN: usize = 16;

/// Digits taken from the end of the millisecond timestamp
const TIMESTAMP_DIGITS: usize = 10;

/// Digits drawn from the random source
const RANDOM_DIGITS: usize = STUDENT_NUMBER_LEN - TIMESTAMP_DIGITS;

/// A 16-digit student number.
///
/// Generated once when a profile is created and never changed afterwards.
/// Uniqueness is probabilistic: time plus randomness, nothing is checked
/// against the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentNumber(String);

impl StudentNumber {
    /// Generate a new student number.
    ///
    /// The result is the last 10 digits of `now_millis` (zero padded)
    /// followed by 6 digits from `rng`. `rng` is called once per random digit
    /// and must return a value in `0..=9`; larger values are reduced modulo 10.
    pub fn generate(now_millis: u64, mut rng: impl FnMut() -> u32) -> Self {
        let stamp = format!("{:0width$}", now_millis, width = TIMESTAMP_DIGITS);
        let suffix = &stamp[stamp.len() - TIMESTAMP_DIGITS..];

        let mut number = String::with_capacity(STUDENT_NUMBER_LEN);
        number.push_str(suffix);
        for _ in 0..RANDOM_DIGITS {
            let digit = rng() % 10;
            number.push(char::from(b'0' + digit as u8));
        }
        Self(number)
    }

    /// Parse a student number typed by a person: surrounding and inner
    /// spaces are ignored, everything else must be a digit.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.len() != STUDENT_NUMBER_LEN || !compact.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "Student number must be exactly {} digits",
                STUDENT_NUMBER_LEN
            )));
        }
        Ok(Self(compact))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StudentNumber {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<StudentNumber> for String {
    fn from(number: StudentNumber) -> String {
        number.0
    }
}
