use crate::error::ClientError;

use common::ErrorLocation;

use std::panic::Location;
use std::time::Duration;

use reqwest::Client;
use url::Url;

const USER_AGENT: &str = concat!("relay-bot/", env!("CARGO_PKG_VERSION"));

/// Build an HTTP client whose every request is bounded by `timeout`.
#[track_caller]
pub(crate) fn build_client(timeout: Duration) -> Result<Client, ClientError> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;

    Ok(client)
}

/// Parse a configured endpoint, accepting only http(s).
#[track_caller]
pub(crate) fn parse_endpoint(raw: &str) -> Result<Url, ClientError> {
    let url = Url::parse(raw)?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::Endpoint {
            message: format!("Unsupported scheme '{other}' in endpoint {raw}"),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
