use relay_core::bin_lookup::{BinLookup, FlagTable, normalize};
use relay_core::config::{BinLookupConfig, ImageConfig, ScreenshotConfig};
use relay_core::error::BinError;

use std::sync::Arc;

use wiremock::MockServer;

pub const CARD_PATH: &str = "/api/ccgenerator";
pub const BIN_PATH: &str = "/api/bin";
pub const IMAGE_PATH: &str = "/prompt/";
pub const SCREENSHOT_PATH: &str = "/get/fullpage/noanimate/";

/// Address nothing listens on, for connection-refused cases.
pub const REFUSED_BASE: &str = "http://127.0.0.1:1";

pub fn bin_lookup_config(server: &MockServer) -> BinLookupConfig {
    BinLookupConfig {
        card_endpoint: format!("{}{CARD_PATH}", server.uri()),
        bin_endpoint: format!("{}{BIN_PATH}", server.uri()),
        request_timeout_secs: 2,
        ..BinLookupConfig::default()
    }
}

pub fn bin_lookup(server: &MockServer) -> BinLookup {
    BinLookup::new(&bin_lookup_config(server), Arc::new(FlagTable::builtin()))
        .expect("Failed to build BinLookup")
}

/// The `/gen` flow: normalize, fetch both upstreams, render.
pub async fn reply_for(lookup: &BinLookup, raw: &str) -> Result<String, BinError> {
    let bin = normalize(raw)?;
    Ok(lookup.fetch(bin).await.render())
}

pub fn image_config(base: &str) -> ImageConfig {
    ImageConfig {
        endpoint: format!("{base}{IMAGE_PATH}"),
        timeout_secs: 1,
        ..ImageConfig::default()
    }
}

pub fn screenshot_config(server: &MockServer) -> ScreenshotConfig {
    ScreenshotConfig {
        endpoint: format!("{}{SCREENSHOT_PATH}", server.uri()),
        timeout_secs: 2,
    }
}
