use relay_bot::state::BotState;

use relay_core::bin_lookup::normalize;
use relay_core::config::RelayConfig;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// BotState wiring: config -> relay-core clients
// ============================================================================

fn config_for(server: &MockServer) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.bin_lookup.card_endpoint = format!("{}/ccgenerator", server.uri());
    config.bin_lookup.bin_endpoint = format!("{}/bin", server.uri());
    config.image.endpoint = format!("{}/prompt/", server.uri());
    config.screenshot.endpoint = format!("{}/shot/", server.uri());
    config
        .bin_lookup
        .extra_flags
        .insert("united kingdom".to_string(), "🇬🇧".to_string());
    config
}

/// **VALUE**: Verifies the state built at startup uses the configured endpoints and the
/// extended flag table.
///
/// **WHY THIS MATTERS**: Handlers only see `BotState`; if a config value is lost here the
/// bot silently talks to the default services.
///
/// **BUG THIS CATCHES**: Would catch `extra_flags` not being merged into the flag table, or
/// an endpoint override not reaching its client.
#[tokio::test]
async fn given_config_with_overrides_when_state_built_then_clients_use_them() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ccgenerator"))
        .respond_with(ResponseTemplate::new(200).set_body_string("4571731111111111|01|2030|111"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bin"))
        .and(query_param("bin", "457173"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"country":"United Kingdom"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let state = BotState::from_config(&config_for(&server)).unwrap();

    // WHEN
    let bin = normalize("457173").unwrap();
    let reply = state.bin_lookup.fetch(bin).await.render();

    // THEN
    assert!(reply.ends_with("𝗖𝗼𝘂𝗻𝘁𝗿𝘆: UNITED KINGDOM 🇬🇧"));
    assert_eq!(state.images.count(), 3);
}

/// **VALUE**: Verifies a bad endpoint is caught while building state, before dispatch starts.
///
/// **BUG THIS CATCHES**: Would catch client construction deferring URL errors to the first
/// command.
#[tokio::test]
async fn given_non_http_endpoint_when_state_built_then_error() {
    let server = MockServer::start().await;
    let mut config = config_for(&server);
    config.screenshot.endpoint = "ftp://example.com/".to_string();

    assert!(BotState::from_config(&config).is_err());
}
