//! `/gen` pipeline: normalize a BIN, generate cards and look up issuer details.
//!
//! ```text
//! raw input -> normalize -> ┬ CardClient::fetch     ┬ -> format_response
//!                           └ MetadataClient::fetch ┘
//! ```
//!
//! The two fetches run as separate tasks and are both awaited before formatting. Only a
//! malformed BIN is reported as an error; upstream failures become part of the reply.

pub mod cards;
pub mod flags;
pub mod format;
pub mod metadata;
pub mod normalizer;

pub use cards::CardClient;
pub use flags::FlagTable;
pub use format::{escape_html, format_response};
pub use metadata::MetadataClient;
pub use normalizer::normalize;

use crate::config::BinLookupConfig;
use crate::error::{ClientError, FetchError};

use models::{BinMetadata, CardBatch, NormalizedBin};

use std::sync::Arc;

use log::{debug, info};
use tokio::spawn as TokioSpawn;

/// Results of the two independent upstream calls for one BIN.
#[derive(Debug)]
pub struct LookupOutcome {
    pub bin: NormalizedBin,
    pub cards: Result<CardBatch, FetchError>,
    pub metadata: Result<BinMetadata, FetchError>,
}

impl LookupOutcome {
    pub fn render(&self) -> String {
        format_response(&self.cards, &self.bin, &self.metadata)
    }
}

#[derive(Debug, Clone)]
pub struct BinLookup {
    cards: CardClient,
    metadata: MetadataClient,
}

impl BinLookup {
    pub fn new(config: &BinLookupConfig, flags: Arc<FlagTable>) -> Result<Self, ClientError> {
        Ok(Self {
            cards: CardClient::new(config)?,
            metadata: MetadataClient::new(config, flags)?,
        })
    }

    /// Run both upstream calls for an already-normalized BIN.
    ///
    /// Never fails: every upstream problem is captured in the outcome.
    pub async fn fetch(&self, bin: NormalizedBin) -> LookupOutcome {
        debug!("Fetching cards and details for {bin}");

        let cards_task = {
            let client = self.cards.clone();
            let bin = bin.clone();
            TokioSpawn(async move { client.fetch(&bin).await })
        };

        let metadata_task = {
            let client = self.metadata.clone();
            let bin = bin.clone();
            TokioSpawn(async move { client.fetch(&bin).await })
        };

        let (cards, metadata) = tokio::join!(cards_task, metadata_task);

        let outcome = LookupOutcome {
            bin,
            cards: cards.unwrap_or_else(|e| Err(FetchError::from(e))),
            metadata: metadata.unwrap_or_else(|e| Err(FetchError::from(e))),
        };

        info!(
            "BIN {} lookup finished (cards ok: {}, metadata ok: {})",
            outcome.bin.prefix(),
            outcome.cards.is_ok(),
            outcome.metadata.is_ok()
        );

        outcome
    }
}
