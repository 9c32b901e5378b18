use crate::{BinMetadata, BinMetadataBuilder, DEFAULT_FLAG, ModelError, NOT_FOUND};

/// **VALUE**: Verifies that every field the lookup service omitted renders as `NOT FOUND`.
///
/// **WHY THIS MATTERS**: Lookup providers routinely omit `tier` or `issuer`. The reply must
/// still show every line instead of blanks.
///
/// **BUG THIS CATCHES**: Would catch a builder that defaults to empty strings.
#[test]
fn given_only_some_fields_when_building_then_missing_fields_are_not_found() {
    // GIVEN: Builder with everything except tier and bank
    let builder = BinMetadataBuilder::default()
        .with_card_type("credit")
        .with_network("visa")
        .with_country("france")
        .with_flag("🇫🇷");

    // WHEN
    let metadata = builder.build().unwrap();

    // THEN
    assert_eq!(metadata.tier, NOT_FOUND);
    assert_eq!(metadata.bank, NOT_FOUND);
    assert_eq!(metadata.card_type, "CREDIT");
    assert_eq!(metadata.network, "VISA");
    assert_eq!(metadata.country, "FRANCE");
    assert_eq!(metadata.flag, "🇫🇷");
}

/// **VALUE**: Verifies present values are upper-cased, including multi-word names.
///
/// **WHY THIS MATTERS**: The reply layout uses upper-case everywhere.
///
/// **BUG THIS CATCHES**: Would catch only the first letter being capitalized.
#[test]
fn given_lowercase_bank_when_building_then_bank_is_uppercased() {
    let metadata = BinMetadataBuilder::default()
        .with_bank("acme bank")
        .build()
        .unwrap();

    assert_eq!(metadata.bank, "ACME BANK");
}

/// **VALUE**: Verifies present-but-empty strings are kept, not replaced with `NOT FOUND`.
///
/// **WHY THIS MATTERS**: Fallback applies only to absent keys; an empty value is the
/// provider's answer and is shown as-is.
///
/// **BUG THIS CATCHES**: Would catch a builder that also treats `""` as missing.
#[test]
fn given_empty_tier_when_building_then_tier_stays_empty() {
    let metadata = BinMetadataBuilder::default().with_tier("").build().unwrap();

    assert_eq!(metadata.tier, "");
}

/// **VALUE**: Verifies the flag defaults to the white flag and rejects blanks.
///
/// **WHY THIS MATTERS**: The country line always ends with a glyph.
///
/// **BUG THIS CATCHES**: Would catch a blank flag slipping into the reply.
#[test]
fn given_flag_variants_when_building_then_default_applies_and_blank_is_rejected() {
    let defaulted = BinMetadataBuilder::default().build().unwrap();
    assert_eq!(defaulted.flag, DEFAULT_FLAG);

    let result = BinMetadataBuilder::default().with_flag("  ").build();
    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Flag cannot be empty");
        }
        Ok(_) => panic!("blank flag should be rejected"),
    }
}

/// **VALUE**: Verifies `display_country()` matches the value stored on build.
///
/// **WHY THIS MATTERS**: Flag lookup keys off this value before the record is built.
///
/// **BUG THIS CATCHES**: Would catch lookups done on the raw, lower-case country.
#[test]
fn given_country_when_display_country_called_then_matches_built_value() {
    let builder = BinMetadataBuilder::default().with_country("united states");

    assert_eq!(builder.display_country(), "UNITED STATES");
    assert_eq!(
        BinMetadataBuilder::default().display_country(),
        NOT_FOUND
    );
}

/// **VALUE**: Verifies the all-unknown record used after a failed lookup.
///
/// **WHY THIS MATTERS**: A failed metadata lookup must not hide the generated cards.
///
/// **BUG THIS CATCHES**: Would catch drift between `not_found()` and builder defaults.
#[test]
fn given_failed_lookup_when_not_found_used_then_matches_empty_builder() {
    let from_builder = BinMetadataBuilder::default().build().unwrap();

    assert_eq!(BinMetadata::not_found(), from_builder);
}
