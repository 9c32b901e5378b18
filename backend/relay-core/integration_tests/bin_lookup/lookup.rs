use crate::helpers::{BIN_PATH, CARD_PATH, bin_lookup, reply_for};

use relay_core::error::BinError;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CARDS: [&str; 10] = [
    "4571736071283012|03|2029|512",
    "4571738864025514|11|2027|093",
    "4571734410637785|07|2030|774",
    "4571739212008431|01|2028|260",
    "4571731575893340|05|2029|318",
    "4571737043116698|09|2026|847",
    "4571732869450027|12|2031|605",
    "4571735530271862|02|2027|139",
    "4571738198724405|06|2030|982",
    "4571730654319273|10|2028|451",
];

async fn mount_card_generator(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(CARD_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mount_lookup(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(BIN_PATH))
        .and(query_param("bin", "457173"))
        .respond_with(template)
        .mount(server)
        .await;
}

// ============================================================================
// normalize() + BinLookup::fetch() + render(), end to end
// ============================================================================

/// **VALUE**: Verifies a full `/gen 457173` reply from both upstreams.
///
/// **WHY THIS MATTERS**: This is the exact text users receive; any drift in layout, casing or
/// flag lookup is visible.
///
/// **BUG THIS CATCHES**: Would catch either fetch being skipped, the results being swapped, or
/// the reply layout changing.
#[tokio::test]
async fn given_both_upstreams_ok_when_looking_up_then_full_reply() {
    // GIVEN
    let server = MockServer::start().await;
    mount_card_generator(
        &server,
        ResponseTemplate::new(200).set_body_string(CARDS.join("\n")),
    )
    .await;
    mount_lookup(
        &server,
        ResponseTemplate::new(200).set_body_string(
            r#"{"issuer":"BNP Paribas","type":"debit","scheme":"visa","tier":"classic","country":"France"}"#,
        ),
    )
    .await;

    // WHEN
    let reply = reply_for(&bin_lookup(&server), "457173").await.unwrap();

    // THEN
    let mut expected = String::from("𝗕𝗜𝗡 ⇾ <code>457173</code>\n𝗔𝗺𝗼𝘂𝗻𝘁 ⇾ <code>10</code>\n\n");
    for card in CARDS {
        expected.push_str(&format!("<code>{card}</code>\n"));
    }
    expected.push_str("\n𝗜𝗻𝗳𝗼: DEBIT - VISA (CLASSIC)\n");
    expected.push_str("𝐈𝐬𝐬𝐮𝐞𝐫: BNP PARIBAS\n");
    expected.push_str("𝗖𝗼𝘂𝗻𝘁𝗿𝘆: FRANCE 🇫🇷");

    assert_eq!(reply, expected);
}

/// **VALUE**: Verifies a lookup failure still delivers the cards.
///
/// **BUG THIS CATCHES**: Would catch a metadata error aborting the whole reply.
#[tokio::test]
async fn given_lookup_down_when_looking_up_then_cards_with_not_found_details() {
    let server = MockServer::start().await;
    mount_card_generator(
        &server,
        ResponseTemplate::new(200).set_body_string(CARDS[..2].join("\n")),
    )
    .await;
    mount_lookup(&server, ResponseTemplate::new(503)).await;

    let reply = reply_for(&bin_lookup(&server), "457173").await.unwrap();

    assert!(reply.contains("<code>4571736071283012|03|2029|512</code>"));
    assert!(reply.contains("𝗜𝗻𝗳𝗼: NOT FOUND - NOT FOUND (NOT FOUND)"));
    assert!(reply.ends_with("𝗖𝗼𝘂𝗻𝘁𝗿𝘆: NOT FOUND 🏳️"));
}

/// **VALUE**: Verifies a generator failure replaces the reply with the error line.
///
/// **BUG THIS CATCHES**: Would catch an upstream error being rendered as an empty card list.
#[tokio::test]
async fn given_generator_down_when_looking_up_then_error_reply() {
    let server = MockServer::start().await;
    mount_card_generator(&server, ResponseTemplate::new(502)).await;
    mount_lookup(&server, ResponseTemplate::new(200).set_body_string("{}")).await;

    let reply = reply_for(&bin_lookup(&server), "457173").await.unwrap();

    assert_eq!(reply, "❌ ERROR: API error: 502");
}

/// **VALUE**: Verifies an empty generator body gives the fixed "no cards" reply.
///
/// **BUG THIS CATCHES**: Would catch a header with `Amount ⇾ 0` being sent instead.
#[tokio::test]
async fn given_empty_generator_body_when_looking_up_then_no_cards_reply() {
    let server = MockServer::start().await;
    mount_card_generator(&server, ResponseTemplate::new(200).set_body_string("  \n")).await;
    mount_lookup(&server, ResponseTemplate::new(200).set_body_string("{}")).await;

    let reply = reply_for(&bin_lookup(&server), "457173").await.unwrap();

    assert_eq!(reply, "❌ NO CARDS GENERATED.");
}

/// **VALUE**: Verifies malformed input is rejected without touching the network.
///
/// **WHY THIS MATTERS**: Garbage input should cost nothing upstream.
///
/// **BUG THIS CATCHES**: Would catch validation moving after the fetch.
#[tokio::test]
async fn given_invalid_bin_when_looking_up_then_invalid_format_and_no_requests() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    // WHEN
    let result = reply_for(&bin_lookup(&server), "12ab34").await;

    // THEN
    match result {
        Err(BinError::InvalidFormat { input, .. }) => assert_eq!(input, "12ab34"),
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
}

/// **VALUE**: Verifies a 204 from the generator is shown as an API error.
///
/// **WHY THIS MATTERS**: "No cards generated" means the generator answered with nothing;
/// a 204 is a status the user should see.
///
/// **BUG THIS CATCHES**: Would catch any 2xx being accepted as a card body.
#[tokio::test]
async fn given_generator_returns_204_when_looking_up_then_error_reply() {
    let server = MockServer::start().await;
    mount_card_generator(&server, ResponseTemplate::new(204)).await;
    mount_lookup(&server, ResponseTemplate::new(200).set_body_string("{}")).await;

    let reply = reply_for(&bin_lookup(&server), "457173").await.unwrap();

    assert_eq!(reply, "❌ ERROR: API error: 204");
}

/// **VALUE**: Verifies an explicit `null` in the lookup body fails the whole lookup.
///
/// **WHY THIS MATTERS**: Only an absent key has a defined fallback; a `null` value means the
/// body is not what the service normally sends, so none of its fields are trusted.
///
/// **BUG THIS CATCHES**: Would catch `null` being read as a missing key and the remaining
/// fields being shown next to a `NOT FOUND` issuer.
#[tokio::test]
async fn given_null_issuer_when_looking_up_then_every_detail_not_found() {
    // GIVEN
    let server = MockServer::start().await;
    mount_card_generator(
        &server,
        ResponseTemplate::new(200).set_body_string(CARDS[0]),
    )
    .await;
    mount_lookup(
        &server,
        ResponseTemplate::new(200).set_body_string(
            r#"{"issuer":null,"type":"credit","scheme":"visa","tier":"classic","country":"france"}"#,
        ),
    )
    .await;

    // WHEN
    let reply = reply_for(&bin_lookup(&server), "457173").await.unwrap();

    // THEN
    assert!(reply.contains("<code>4571736071283012|03|2029|512</code>"));
    assert!(reply.contains("𝗜𝗻𝗳𝗼: NOT FOUND - NOT FOUND (NOT FOUND)\n"));
    assert!(reply.contains("𝐈𝐬𝐬𝐮𝐞𝐫: NOT FOUND\n"));
    assert!(reply.ends_with("𝗖𝗼𝘂𝗻𝘁𝗿𝘆: NOT FOUND 🏳️"));
}
