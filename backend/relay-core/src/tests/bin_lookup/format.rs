use crate::bin_lookup::format::NO_CARDS_MESSAGE;
use crate::bin_lookup::{escape_html, format_response};
use crate::error::FetchError;

use common::{ErrorLocation, HttpStatusCode};
use models::{BinMetadata, BinMetadataBuilder, CardBatch, NormalizedBin};

use std::panic::Location;

fn bin() -> NormalizedBin {
    NormalizedBin::from_digits("457173").unwrap()
}

fn france_credit() -> BinMetadata {
    BinMetadataBuilder::default()
        .with_bank("acme bank")
        .with_card_type("credit")
        .with_network("visa")
        .with_tier("classic")
        .with_country("france")
        .with_flag("🇫🇷")
        .build()
        .unwrap()
}

fn status_error(code: u16) -> FetchError {
    FetchError::UpstreamStatus {
        status: HttpStatusCode(code),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// **VALUE**: Verifies a card failure replaces the reply and hides all metadata.
///
/// **WHY THIS MATTERS**: Without cards the BIN details are noise; the user needs the reason.
///
/// **BUG THIS CATCHES**: Would catch the formatter rendering metadata next to an error.
#[test]
fn given_card_error_when_formatted_then_only_error_is_shown() {
    // GIVEN
    let cards = Err(status_error(503));
    let metadata = Ok(france_credit());

    // WHEN
    let text = format_response(&cards, &bin(), &metadata);

    // THEN
    assert_eq!(text, "❌ ERROR: API error: 503");
    assert!(!text.contains("VISA"));
    assert!(!text.contains("ACME BANK"));
}

/// **VALUE**: Verifies transport error descriptions reach the user verbatim.
///
/// **BUG THIS CATCHES**: Would catch the error's Display (with source location) leaking
/// into chat instead of the plain description.
#[test]
fn given_transport_error_when_formatted_then_description_is_embedded() {
    let cards = Err(FetchError::Transport {
        message: "operation timed out".to_string(),
        location: ErrorLocation::from(Location::caller()),
    });

    let text = format_response(&cards, &bin(), &Ok(france_credit()));

    assert!(text.contains("operation timed out"));
    assert!(!text.contains(".rs:"));
}

/// **VALUE**: Verifies an empty batch gets the fixed message whatever the metadata says.
///
/// **BUG THIS CATCHES**: Would catch an `Amount ⇾ 0` reply with no cards.
#[test]
fn given_empty_batch_when_formatted_then_no_cards_message() {
    let with_metadata = format_response(&Ok(CardBatch::default()), &bin(), &Ok(france_credit()));
    let without_metadata =
        format_response(&Ok(CardBatch::default()), &bin(), &Err(status_error(500)));

    assert_eq!(with_metadata, NO_CARDS_MESSAGE);
    assert_eq!(without_metadata, NO_CARDS_MESSAGE);
}

/// **VALUE**: Verifies the full layout: prefix, count, upper-cased cards, then the three
/// metadata lines in order.
///
/// **WHY THIS MATTERS**: Users copy cards out of `<code>` blocks; order and markup matter.
///
/// **BUG THIS CATCHES**: Would catch reordered lines, the padded BIN being shown instead of
/// the prefix, or card lines left in lower case.
#[test]
fn given_cards_and_metadata_when_formatted_then_fields_appear_in_order() {
    // GIVEN
    let cards = Ok(CardBatch::new(vec![
        "4571730000000001|01|2030|abc".to_string(),
        "4571730000000002|02|2031|def".to_string(),
    ]));

    // WHEN
    let text = format_response(&cards, &bin(), &Ok(france_credit()));

    // THEN
    assert!(text.contains("<code>457173</code>"));
    assert!(!text.contains("xxxx"));
    assert!(text.contains("<code>2</code>"));
    assert!(text.contains("<code>4571730000000001|01|2030|ABC</code>"));

    let positions: Vec<usize> = [
        "457173",
        "<code>2</code>",
        "|ABC",
        "|DEF",
        "CREDIT - VISA (CLASSIC)",
        "ACME BANK",
        "FRANCE 🇫🇷",
    ]
    .iter()
    .map(|needle| text.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
}

/// **VALUE**: Verifies a failed metadata lookup still shows the cards with placeholders.
///
/// **BUG THIS CATCHES**: Would catch a metadata failure swallowing a successful batch.
#[test]
fn given_metadata_error_when_formatted_then_cards_with_not_found_fields() {
    let cards = Ok(CardBatch::new(vec!["4571730000000001|01|2030|123".to_string()]));

    let text = format_response(&cards, &bin(), &Err(status_error(404)));

    assert!(text.contains("4571730000000001|01|2030|123"));
    assert!(text.contains("NOT FOUND - NOT FOUND (NOT FOUND)"));
    assert!(text.contains("🏳️"));
}

/// **VALUE**: Verifies provider text is escaped for Telegram HTML.
///
/// **WHY THIS MATTERS**: Telegram rejects the whole message on an unbalanced `<`; a bank
/// called `A&B <UK>` would make every lookup for that BIN fail to send.
///
/// **BUG THIS CATCHES**: Would catch raw interpolation of provider strings.
#[test]
fn given_markup_in_fields_when_formatted_then_escaped() {
    let metadata = BinMetadataBuilder::default()
        .with_bank("a&b <uk>")
        .build()
        .unwrap();
    let cards = Ok(CardBatch::new(vec!["1<2".to_string()]));

    let text = format_response(&cards, &bin(), &Ok(metadata));

    assert!(text.contains("A&amp;B &lt;UK&gt;"));
    assert!(text.contains("<code>1&lt;2</code>"));
    assert_eq!(escape_html("plain"), "plain");
}

/// **VALUE**: Verifies formatting is deterministic.
///
/// **BUG THIS CATCHES**: Would catch iteration over an unordered collection in the layout.
#[test]
fn given_same_inputs_when_formatted_twice_then_identical() {
    let cards = Ok(CardBatch::new(vec!["a".to_string(), "b".to_string()]));

    let first = format_response(&cards, &bin(), &Ok(france_credit()));
    let second = format_response(&cards, &bin(), &Ok(france_credit()));

    assert_eq!(first, second);
}
