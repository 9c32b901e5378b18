use crate::error::BotError;

use relay_core::bin_lookup::{BinLookup, FlagTable};
use relay_core::config::RelayConfig;
use relay_core::image_gen::ImageGenerator;
use relay_core::screenshot::ScreenshotClient;

use std::sync::Arc;

use log::info;

/// Everything the command handlers need, built once at startup and shared by `Arc`.
#[derive(Debug, Clone)]
pub struct BotState {
    pub bin_lookup: BinLookup,
    pub images: ImageGenerator,
    pub screenshots: ScreenshotClient,
}

impl BotState {
    pub fn from_config(config: &RelayConfig) -> Result<Self, BotError> {
        let flags =
            Arc::new(FlagTable::builtin().with_extra(&config.bin_lookup.extra_flags));
        info!("Flag table ready with {} entries", flags.len());

        Ok(Self {
            bin_lookup: BinLookup::new(&config.bin_lookup, flags)?,
            images: ImageGenerator::new(&config.image)?,
            screenshots: ScreenshotClient::new(&config.screenshot)?,
        })
    }
}
