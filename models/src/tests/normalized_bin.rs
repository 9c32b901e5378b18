use crate::{ModelError, NormalizedBin};

/// **VALUE**: Verifies 6-digit BINs are padded to 16 characters.
///
/// **WHY THIS MATTERS**: The generator expects a full-length pattern and fills the `x`
/// positions itself.
///
/// **BUG THIS CATCHES**: Would catch padding with the wrong character or length.
#[test]
fn given_six_digits_when_wrapped_then_padded_with_filler() {
    let bin = NormalizedBin::from_digits("457173").unwrap();

    assert_eq!(bin.as_str(), "457173xxxxxxxxxx");
    assert_eq!(bin.as_str().len(), 16);
    assert_eq!(bin.prefix(), "457173");
}

/// **VALUE**: Verifies 7-16 digit runs are stored verbatim.
///
/// **WHY THIS MATTERS**: Longer BINs are forwarded unchanged.
///
/// **BUG THIS CATCHES**: Would catch padding or truncation applied to every length.
#[test]
fn given_ten_digits_when_wrapped_then_kept_verbatim() {
    let bin = NormalizedBin::from_digits("4571731234").unwrap();

    assert_eq!(bin.as_str(), "4571731234");
    assert_eq!(bin.prefix(), "457173");
}

/// **VALUE**: Verifies out-of-range or non-digit input is rejected.
///
/// **WHY THIS MATTERS**: `prefix()` slices the first six bytes; anything shorter would panic.
///
/// **BUG THIS CATCHES**: Would catch the length guard being dropped.
#[test]
fn given_invalid_digit_runs_when_wrapped_then_validation_error() {
    for input in ["12345", "12345678901234567", "45717a"] {
        match NormalizedBin::from_digits(input) {
            Err(ModelError::Validation { .. }) => {}
            Ok(bin) => panic!("{input} should be rejected, got {bin}"),
        }
    }
}
