use crate::helpers::{CARD_PATH, bin_lookup_config};

use relay_core::bin_lookup::{CardClient, normalize};
use relay_core::error::FetchError;

use common::HttpStatusCode;

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// CardClient::fetch() against a mocked card generator
// ============================================================================

/// **VALUE**: Verifies the generator is called with the padded BIN and a count of 10.
///
/// **WHY THIS MATTERS**: The generator fills `x` positions itself; sending the raw 6 digits
/// or omitting the count changes what comes back.
///
/// **BUG THIS CATCHES**: Would catch the padded BIN not being sent, or the query key names
/// drifting from `bin` and `count`.
#[tokio::test]
async fn given_six_digit_bin_when_fetching_cards_then_padded_bin_and_count_sent() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CARD_PATH))
        .and(query_param("bin", "457173xxxxxxxxxx"))
        .and(query_param("count", "10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("4571731234567890|01|2027|123\r\n4571739876543210|02|2028|456"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = CardClient::new(&bin_lookup_config(&server)).unwrap();
    let bin = normalize("457173").unwrap();

    // WHEN
    let batch = client.fetch(&bin).await.unwrap();

    // THEN
    assert_eq!(batch.len(), 2);
    assert_eq!(batch.lines()[1], "4571739876543210|02|2028|456");
}

/// **VALUE**: Verifies a non-200 status becomes `UpstreamStatus` carrying the code.
///
/// **BUG THIS CATCHES**: Would catch an error page being rendered as card lines.
#[tokio::test]
async fn given_generator_returns_500_when_fetching_cards_then_upstream_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CARD_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = CardClient::new(&bin_lookup_config(&server)).unwrap();
    let result = client.fetch(&normalize("457173").unwrap()).await;

    match result {
        Err(FetchError::UpstreamStatus { status, .. }) => assert_eq!(status, HttpStatusCode(500)),
        other => panic!("expected UpstreamStatus, got {other:?}"),
    }
}

/// **VALUE**: Verifies a 204 is an upstream error rather than an empty batch.
///
/// **WHY THIS MATTERS**: Only 200 carries cards; other 2xx answers mean the generator did
/// not produce any and the user should see the status.
///
/// **BUG THIS CATCHES**: Would catch the status check accepting the whole 2xx range.
#[tokio::test]
async fn given_generator_returns_204_when_fetching_cards_then_upstream_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CARD_PATH))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = CardClient::new(&bin_lookup_config(&server)).unwrap();
    let result = client.fetch(&normalize("457173").unwrap()).await;

    match result {
        Err(FetchError::UpstreamStatus { status, .. }) => assert_eq!(status, HttpStatusCode(204)),
        other => panic!("expected UpstreamStatus, got {other:?}"),
    }
}

/// **VALUE**: Verifies a slow generator is cut off by the request timeout.
///
/// **WHY THIS MATTERS**: Without a bound a hung upstream would pin the chat handler forever.
///
/// **BUG THIS CATCHES**: Would catch the configured timeout not reaching the HTTP client.
#[tokio::test]
async fn given_slow_generator_when_fetching_cards_then_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CARD_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("4571731234567890|01|2027|123")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let mut config = bin_lookup_config(&server);
    config.request_timeout_secs = 1;
    let client = CardClient::new(&config).unwrap();

    let result = client.fetch(&normalize("457173").unwrap()).await;

    assert!(matches!(result, Err(FetchError::Transport { .. })));
}
