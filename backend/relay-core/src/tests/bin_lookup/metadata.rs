use crate::bin_lookup::FlagTable;
use crate::bin_lookup::metadata::LookupResponse;

use models::{DEFAULT_FLAG, NOT_FOUND};

fn parse(body: &str) -> LookupResponse {
    serde_json::from_str(body).unwrap()
}

/// **VALUE**: Verifies a missing `tier` becomes `NOT FOUND` while the rest is upper-cased.
///
/// **WHY THIS MATTERS**: Lookup providers omit tier for many BINs.
///
/// **BUG THIS CATCHES**: Would catch a missing key failing the whole decode.
#[test]
fn given_body_without_tier_when_mapped_then_tier_not_found() {
    // GIVEN
    let response = parse(
        r#"{"issuer":"acme bank","type":"credit","scheme":"visa","country":"france"}"#,
    );

    // WHEN
    let metadata = response.into_metadata(&FlagTable::builtin()).unwrap();

    // THEN
    assert_eq!(metadata.tier, NOT_FOUND);
    assert_eq!(metadata.bank, "ACME BANK");
    assert_eq!(metadata.card_type, "CREDIT");
    assert_eq!(metadata.network, "VISA");
    assert_eq!(metadata.country, "FRANCE");
    assert_eq!(metadata.flag, "🇫🇷");
}

/// **VALUE**: Verifies country lookup is case-normalized and unknown countries fall back.
///
/// **BUG THIS CATCHES**: Would catch flag lookup on the raw provider value.
#[test]
fn given_mixed_case_countries_when_mapped_then_flag_resolves_case_insensitively() {
    let table = FlagTable::builtin();

    let france = parse(r#"{"country":"france"}"#).into_metadata(&table).unwrap();
    let atlantis = parse(r#"{"country":"Atlantis"}"#).into_metadata(&table).unwrap();

    assert_eq!(france.flag, "🇫🇷");
    assert_eq!(atlantis.flag, DEFAULT_FLAG);
    assert_eq!(atlantis.country, "ATLANTIS");
}

/// **VALUE**: Verifies unknown keys are ignored and an empty object maps to all fallbacks.
///
/// **BUG THIS CATCHES**: Would catch `deny_unknown_fields` sneaking onto the response type.
#[test]
fn given_empty_or_extra_keys_when_mapped_then_everything_not_found() {
    let metadata = parse(r#"{"bank_phone":"+1 555","valid":true}"#)
        .into_metadata(&FlagTable::builtin())
        .unwrap();

    assert_eq!(metadata.bank, NOT_FOUND);
    assert_eq!(metadata.country, NOT_FOUND);
    assert_eq!(metadata.flag, DEFAULT_FLAG);
}

/// **VALUE**: Verifies an explicit `null` is a decode failure, unlike an absent key.
///
/// **WHY THIS MATTERS**: A decode failure sends the formatter down its all-`NOT FOUND` path,
/// so no half-trusted details are shown.
///
/// **BUG THIS CATCHES**: Would catch `null` silently mapping to `NOT FOUND` for one field.
#[test]
fn given_null_issuer_when_parsed_then_error() {
    assert!(
        serde_json::from_str::<LookupResponse>(r#"{"issuer":null,"scheme":"mastercard"}"#)
            .is_err()
    );
    assert!(serde_json::from_str::<LookupResponse>(r#"{"country":null}"#).is_err());
}

/// **VALUE**: Verifies non-object or wrongly-typed bodies fail to decode.
///
/// **WHY THIS MATTERS**: The fetcher converts these failures into `FetchError::Decode`.
///
/// **BUG THIS CATCHES**: Would catch silently coercing numbers into strings.
#[test]
fn given_malformed_bodies_when_parsed_then_error() {
    assert!(serde_json::from_str::<LookupResponse>("not json").is_err());
    assert!(serde_json::from_str::<LookupResponse>(r#"{"tier": 5}"#).is_err());
    assert!(serde_json::from_str::<LookupResponse>(r#""visa""#).is_err());
}
