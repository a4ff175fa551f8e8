//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input contains a character that is not an ASCII digit.
    #[error("phone number may contain digits only")]
    NonDigit,
    /// The input has the wrong length.
    #[error("phone number must be {min}-{max} digits")]
    BadLength {
        /// Minimum allowed digit count.
        min: usize,
        /// Maximum allowed digit count.
        max: usize,
    },
}

/// A contact phone number: 10 to 15 ASCII digits, no separators.
///
/// Matches the order contact schema, which accepts digits only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Minimum digit count.
    pub const MIN_DIGITS: usize = 10;
    /// Maximum digit count.
    pub const MAX_DIGITS: usize = 15;

    /// Parse a `Phone` from a string of digits.
    ///
    /// # Errors
    ///
    /// Returns an error if the input contains non-digit characters or has
    /// fewer than 10 or more than 15 digits.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhoneError::NonDigit);
        }

        if s.len() < Self::MIN_DIGITS || s.len() > Self::MAX_DIGITS {
            return Err(PhoneError::BadLength {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
