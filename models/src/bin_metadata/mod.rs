pub mod builder;

use serde::Serialize;

/// Placeholder shown for any field the lookup service did not return.
pub const NOT_FOUND: &str = "NOT FOUND";

/// White flag shown when the country has no known emoji.
pub const DEFAULT_FLAG: &str = "🏳️";

/// Issuer details for a BIN, already normalized for display.
///
/// Textual fields are upper-cased, with [`NOT_FOUND`] standing in for absent values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinMetadata {
    pub bank: String,
    pub card_type: String,
    pub network: String,
    pub tier: String,
    pub country: String,
    pub flag: String,
}

impl BinMetadata {
    /// Metadata with every field unknown. Used when the lookup itself failed.
    pub fn not_found() -> Self {
        Self {
            bank: NOT_FOUND.to_string(),
            card_type: NOT_FOUND.to_string(),
            network: NOT_FOUND.to_string(),
            tier: NOT_FOUND.to_string(),
            country: NOT_FOUND.to_string(),
            flag: DEFAULT_FLAG.to_string(),
        }
    }
}

impl Default for BinMetadata {
    fn default() -> Self {
        Self::not_found()
    }
}
