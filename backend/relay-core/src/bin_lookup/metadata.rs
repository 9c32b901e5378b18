use crate::bin_lookup::flags::FlagTable;
use crate::config::BinLookupConfig;
use crate::error::{ClientError, FetchError};
use crate::http::{build_client, parse_endpoint};

use common::{ErrorLocation, HttpStatusCode};
use models::{BinMetadata, BinMetadataBuilder, NormalizedBin};

use std::panic::Location;
use std::sync::Arc;

use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use url::Url;

const BIN_QUERY_KEY: &str = "bin";

/// Shape of the lookup service's JSON body.
///
/// Every key may be absent. A key that is present must hold a string; `null` is rejected.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LookupResponse {
    #[serde(default, deserialize_with = "present_string")]
    pub issuer: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "present_string")]
    pub card_type: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub scheme: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub tier: Option<String>,
    #[serde(default, deserialize_with = "present_string")]
    pub country: Option<String>,
}

/// Only runs for keys that exist in the body, so `None` is left to `default`.
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl LookupResponse {
    pub(crate) fn into_metadata(self, flags: &FlagTable) -> Result<BinMetadata, FetchError> {
        let mut builder = BinMetadataBuilder::default();

        if let Some(issuer) = self.issuer {
            builder = builder.with_bank(issuer);
        }
        if let Some(card_type) = self.card_type {
            builder = builder.with_card_type(card_type);
        }
        if let Some(scheme) = self.scheme {
            builder = builder.with_network(scheme);
        }
        if let Some(tier) = self.tier {
            builder = builder.with_tier(tier);
        }
        if let Some(country) = self.country {
            builder = builder.with_country(country);
        }

        let flag = flags.lookup(&builder.display_country()).to_string();

        builder
            .with_flag(flag)
            .build()
            .map_err(|e| FetchError::Decode {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Client for the BIN lookup endpoint.
#[derive(Debug, Clone)]
pub struct MetadataClient {
    endpoint: Url,
    client: Client,
    flags: Arc<FlagTable>,
}

impl MetadataClient {
    pub fn new(config: &BinLookupConfig, flags: Arc<FlagTable>) -> Result<Self, ClientError> {
        Ok(Self {
            endpoint: parse_endpoint(&config.bin_endpoint)?,
            client: build_client(config.request_timeout())?,
            flags,
        })
    }

    /// Only the 6-digit issuer prefix is sent.
    pub fn request_url(&self, bin: &NormalizedBin) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(BIN_QUERY_KEY, bin.prefix());
        url
    }

    /// Look up issuer details for `bin`. Single attempt, no retry.
    ///
    /// # Errors
    ///
    /// * [`FetchError::Transport`] on timeout, connection or body read failure
    /// * [`FetchError::UpstreamStatus`] on any status other than 200
    /// * [`FetchError::Decode`] when the body is not the expected JSON object
    pub async fn fetch(&self, bin: &NormalizedBin) -> Result<BinMetadata, FetchError> {
        let url = self.request_url(bin);
        debug!("Looking up BIN {}", bin.prefix());

        let response = self.client.get(url).send().await?;
        let status = HttpStatusCode::from(response.status().as_u16());

        if !status.is_ok() {
            warn!("BIN lookup returned status {status} for {}", bin.prefix());
            return Err(FetchError::UpstreamStatus {
                status,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = response.text().await?;
        let parsed: LookupResponse = serde_json::from_str(&body)?;

        parsed.into_metadata(&self.flags)
    }
}
