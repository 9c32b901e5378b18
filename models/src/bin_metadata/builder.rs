use crate::error::model_error::ModelError;
use crate::{BinMetadata, DEFAULT_FLAG, ErrorLocation, NOT_FOUND};

use std::panic::Location;

/// Builder for [`BinMetadata`].
///
/// Unset fields fall back to [`NOT_FOUND`]; set fields are upper-cased on build.
#[derive(Debug, Default)]
pub struct BinMetadataBuilder {
    bank: Option<String>,
    card_type: Option<String>,
    network: Option<String>,
    tier: Option<String>,
    country: Option<String>,
    flag: Option<String>,
}

impl BinMetadataBuilder {
    pub fn with_bank(mut self, bank: impl Into<String>) -> Self {
        self.bank = Some(bank.into());
        self
    }

    pub fn with_card_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }

    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = Some(tier.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    /// The country as it will appear in the built record, for flag lookups.
    pub fn display_country(&self) -> String {
        display_field(self.country.as_deref())
    }

    #[track_caller]
    pub fn build(self) -> Result<BinMetadata, ModelError> {
        let flag = self.flag.unwrap_or_else(|| DEFAULT_FLAG.to_string());

        if flag.trim().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Flag cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(BinMetadata {
            bank: display_field(self.bank.as_deref()),
            card_type: display_field(self.card_type.as_deref()),
            network: display_field(self.network.as_deref()),
            tier: display_field(self.tier.as_deref()),
            country: display_field(self.country.as_deref()),
            flag,
        })
    }
}

fn display_field(value: Option<&str>) -> String {
    value
        .map(str::to_uppercase)
        .unwrap_or_else(|| NOT_FOUND.to_string())
}
