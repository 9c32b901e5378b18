use crate::{ErrorLocation, ModelError};

use std::fmt;
use std::panic::Location;

use serde::Serialize;

/// Number of leading digits that identify the issuer.
pub const BIN_PREFIX_LEN: usize = 6;

/// Conceptual length of a padded BIN.
pub const BIN_PADDED_LEN: usize = 16;

/// Character used to pad a bare 6-digit BIN up to 16 characters.
pub const BIN_FILLER: char = 'x';

/// A BIN token ready to be sent to the upstream card services.
///
/// Always starts with at least 6 ASCII digits. A 6-digit BIN is stored padded with
/// [`BIN_FILLER`]; longer digit runs are stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedBin(String);

impl NormalizedBin {
    /// Wrap an already-extracted digit run.
    ///
    /// Runs of exactly 6 digits are padded. Anything that is not 6..=16 ASCII digits is rejected.
    #[track_caller]
    pub fn from_digits(digits: &str) -> Result<Self, ModelError> {
        if !(BIN_PREFIX_LEN..=BIN_PADDED_LEN).contains(&digits.len()) {
            return Err(ModelError::Validation {
                message: format!(
                    "BIN must be {BIN_PREFIX_LEN}-{BIN_PADDED_LEN} digits, got {}",
                    digits.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ModelError::Validation {
                message: format!("BIN must contain only digits: {digits}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if digits.len() == BIN_PREFIX_LEN {
            let mut padded = String::with_capacity(BIN_PADDED_LEN);
            padded.push_str(digits);
            padded.extend(std::iter::repeat_n(BIN_FILLER, BIN_PADDED_LEN - BIN_PREFIX_LEN));
            return Ok(Self(padded));
        }

        Ok(Self(digits.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The issuer prefix used for metadata lookups and display.
    pub fn prefix(&self) -> &str {
        &self.0[..BIN_PREFIX_LEN]
    }
}

impl fmt::Display for NormalizedBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedBin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
