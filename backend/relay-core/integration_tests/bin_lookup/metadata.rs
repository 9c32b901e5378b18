use crate::helpers::{BIN_PATH, bin_lookup_config};

use relay_core::bin_lookup::{FlagTable, MetadataClient, normalize};
use relay_core::error::FetchError;

use std::sync::Arc;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// MetadataClient::fetch() against a mocked lookup service
// ============================================================================

/// **VALUE**: Verifies only the six-digit prefix is sent, even for a 16-digit BIN.
///
/// **WHY THIS MATTERS**: The lookup service keys on the issuer prefix and rejects full PANs.
///
/// **BUG THIS CATCHES**: Would catch the full normalized BIN leaking into the lookup query.
#[tokio::test]
async fn given_full_bin_when_looking_up_then_only_prefix_sent() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(BIN_PATH))
        .and(query_param("bin", "457173"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"issuer":"Acme Bank","type":"credit","scheme":"visa","tier":"classic","country":"France"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        MetadataClient::new(&bin_lookup_config(&server), Arc::new(FlagTable::builtin())).unwrap();

    // WHEN
    let info = client
        .fetch(&normalize("4571731234567890").unwrap())
        .await
        .unwrap();

    // THEN
    assert_eq!(info.bank, "ACME BANK");
    assert_eq!(info.network, "VISA");
    assert_eq!(info.country, "FRANCE");
    assert_eq!(info.flag, "🇫🇷");
}

/// **VALUE**: Verifies a non-JSON 200 body is a decode error.
///
/// **BUG THIS CATCHES**: Would catch an HTML maintenance page being treated as empty metadata.
#[tokio::test]
async fn given_html_body_when_looking_up_then_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(BIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>sleeping</html>"))
        .mount(&server)
        .await;

    let client =
        MetadataClient::new(&bin_lookup_config(&server), Arc::new(FlagTable::builtin())).unwrap();

    let result = client.fetch(&normalize("457173").unwrap()).await;

    assert!(matches!(result, Err(FetchError::Decode { .. })));
}
