use crate::config::BinLookupConfig;
use crate::error::{ClientError, FetchError};
use crate::http::{build_client, parse_endpoint};

use common::{ErrorLocation, HttpStatusCode};
use models::{CardBatch, NormalizedBin};

use std::panic::Location;

use log::{debug, warn};
use reqwest::Client;
use url::Url;

const BIN_QUERY_KEY: &str = "bin";
const COUNT_QUERY_KEY: &str = "count";

/// Client for the card generator endpoint.
#[derive(Debug, Clone)]
pub struct CardClient {
    endpoint: Url,
    client: Client,
    count: u32,
}

impl CardClient {
    pub fn new(config: &BinLookupConfig) -> Result<Self, ClientError> {
        Ok(Self {
            endpoint: parse_endpoint(&config.card_endpoint)?,
            client: build_client(config.request_timeout())?,
            count: config.card_count,
        })
    }

    pub fn request_url(&self, bin: &NormalizedBin) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair(BIN_QUERY_KEY, bin.as_str())
            .append_pair(COUNT_QUERY_KEY, &self.count.to_string());
        url
    }

    /// Generate a batch of cards for `bin`. Single attempt, no retry.
    ///
    /// # Errors
    ///
    /// * [`FetchError::Transport`] on timeout, connection or body read failure
    /// * [`FetchError::UpstreamStatus`] on any status other than 200
    pub async fn fetch(&self, bin: &NormalizedBin) -> Result<CardBatch, FetchError> {
        let url = self.request_url(bin);
        debug!("Requesting {} cards for BIN {}", self.count, bin.prefix());

        let response = self.client.get(url).send().await?;
        let status = HttpStatusCode::from(response.status().as_u16());

        if !status.is_ok() {
            warn!("Card generator returned status {status} for BIN {}", bin.prefix());
            return Err(FetchError::UpstreamStatus {
                status,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = response.text().await?;
        let batch = CardBatch::from_body(&body);

        debug!("Card generator returned {} line(s)", batch.len());
        Ok(batch)
    }
}
