use crate::error::BinError;

use common::ErrorLocation;
use models::NormalizedBin;

use std::panic::Location;
use std::sync::OnceLock;

use regex::Regex;

/// Leading run of 6-16 ASCII digits. Greedy, so the longest run wins.
const BIN_PATTERN: &str = r"^[0-9]{6,16}";

static BIN_REGEX: OnceLock<Regex> = OnceLock::new();

pub(crate) fn get_bin_regex() -> &'static Regex {
    BIN_REGEX.get_or_init(|| Regex::new(BIN_PATTERN).expect("valid regex pattern"))
}

/// Turn raw user input into a [`NormalizedBin`].
///
/// The digit run must start at the first character; leading spaces or letters fail the
/// match rather than being skipped. Trailing text after the run is ignored.
///
/// # Errors
///
/// Returns [`BinError::InvalidFormat`] if the input does not start with at least 6 digits.
#[track_caller]
pub fn normalize(raw: &str) -> Result<NormalizedBin, BinError> {
    let digits = get_bin_regex()
        .find(raw)
        .ok_or_else(|| BinError::InvalidFormat {
            input: raw.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    NormalizedBin::from_digits(digits.as_str()).map_err(|_| BinError::InvalidFormat {
        input: raw.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
