use crate::bin_lookup::normalizer::{get_bin_regex, normalize};
use crate::error::BinError;

/// **VALUE**: Verifies a bare 6-digit BIN is padded to the 16-character generator pattern.
///
/// **WHY THIS MATTERS**: `/gen 457173` is the documented usage. The generator fills the
/// `x` positions; an unpadded 6-digit value produces short or empty batches.
///
/// **BUG THIS CATCHES**: Would catch padding with the wrong filler or to the wrong length.
#[test]
fn given_six_digit_input_when_normalized_then_padded_to_sixteen() {
    // GIVEN
    let raw = "457173";

    // WHEN
    let bin = normalize(raw).unwrap();

    // THEN
    assert_eq!(bin.as_str(), "457173xxxxxxxxxx");
    assert_eq!(&bin.as_str()[..6], raw);
    assert!(bin.as_str()[6..].chars().all(|c| c == 'x'));
}

/// **VALUE**: Verifies input starting with a non-digit is rejected outright.
///
/// **WHY THIS MATTERS**: The digit run must be anchored at the start; skipping a prefix
/// would turn `abc123456` into a valid BIN the user never typed.
///
/// **BUG THIS CATCHES**: Would catch the `^` anchor being dropped from the pattern.
#[test]
fn given_leading_letters_when_normalized_then_invalid_format() {
    for raw in ["abc123", "abc123456", " 457173", "", "x457173"] {
        match normalize(raw) {
            Err(BinError::InvalidFormat { input, .. }) => assert_eq!(input, raw),
            Ok(bin) => panic!("{raw:?} should be rejected, got {bin}"),
        }
    }
}

/// **VALUE**: Verifies the longest leading run up to 16 digits is kept and the rest dropped.
///
/// **WHY THIS MATTERS**: Users paste full card patterns with trailing junk like
/// `|MM|YY`; only the digits are forwarded.
///
/// **BUG THIS CATCHES**: Would catch a lazy quantifier taking only 6 digits.
#[test]
fn given_sixteen_digits_with_suffix_when_normalized_then_suffix_dropped() {
    let bin = normalize("4571731234567890extra").unwrap();

    assert_eq!(bin.as_str(), "4571731234567890");
}

/// **VALUE**: Verifies runs longer than 16 digits are cut at 16.
///
/// **BUG THIS CATCHES**: Would catch an unbounded `{6,}` quantifier.
#[test]
fn given_twenty_digits_when_normalized_then_first_sixteen_kept() {
    let bin = normalize("45717312345678901234").unwrap();

    assert_eq!(bin.as_str(), "4571731234567890");
}

/// **VALUE**: Verifies intermediate lengths pass through without padding.
///
/// **WHY THIS MATTERS**: Only exactly-6 inputs are padded; a 10-digit BIN is forwarded as-is.
///
/// **BUG THIS CATCHES**: Would catch padding applied to every short input.
#[test]
fn given_ten_digits_when_normalized_then_returned_unchanged() {
    let bin = normalize("4571731234|12").unwrap();

    assert_eq!(bin.as_str(), "4571731234");
}

/// **VALUE**: Verifies five digits are not enough.
///
/// **BUG THIS CATCHES**: Would catch the lower bound slipping below 6.
#[test]
fn given_five_digits_when_normalized_then_invalid_format() {
    assert!(normalize("45717").is_err());
    assert!(normalize("45717x").is_err());
}

/// **VALUE**: Verifies non-ASCII digits do not count.
///
/// **WHY THIS MATTERS**: Rust's `\d` is Unicode-aware; Arabic-Indic digits would otherwise be
/// forwarded to the generator.
///
/// **BUG THIS CATCHES**: Would catch the pattern being changed from `[0-9]` to `\d`.
#[test]
fn given_unicode_digits_when_matched_then_regex_rejects() {
    assert!(!get_bin_regex().is_match("٤٥٧١٧٣"));
    assert!(normalize("٤٥٧١٧٣").is_err());
}
