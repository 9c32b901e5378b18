//! Data passed between the relay bot layers.
//!
//! Everything here is plain data with construction-time validation. No I/O.

pub mod bin_metadata;
pub mod card_batch;
pub mod error;
pub mod normalized_bin;

#[cfg(test)]
mod tests;

pub use bin_metadata::builder::BinMetadataBuilder;
pub use bin_metadata::{BinMetadata, DEFAULT_FLAG, NOT_FOUND};
pub use card_batch::CardBatch;
pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use normalized_bin::{BIN_FILLER, BIN_PREFIX_LEN, NormalizedBin};
