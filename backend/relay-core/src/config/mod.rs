use crate::error::config::ConfigError;
use crate::{
    DEFAULT_BIN_ENDPOINT, DEFAULT_CARD_ENDPOINT, DEFAULT_IMAGE_ENDPOINT,
    DEFAULT_SCREENSHOT_ENDPOINT,
};

use common::{ErrorLocation, RedactedToken};

use std::collections::HashMap;
use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::{info, warn};
use serde::Deserialize;
use url::Url;

pub const ENV_BOT_TOKEN: &str = "RELAY_BOT_TOKEN";
pub const ENV_CARD_ENDPOINT: &str = "RELAY_CARD_ENDPOINT";
pub const ENV_BIN_ENDPOINT: &str = "RELAY_BIN_ENDPOINT";
pub const ENV_IMAGE_ENDPOINT: &str = "RELAY_IMAGE_ENDPOINT";
pub const ENV_SCREENSHOT_ENDPOINT: &str = "RELAY_SCREENSHOT_ENDPOINT";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "RELAY_REQUEST_TIMEOUT_SECS";

/// Telegram caps a media group at ten items.
const MAX_IMAGE_COUNT: usize = 10;

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramConfig {
    #[serde(default)]
    pub bot_token: RedactedToken,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BinLookupConfig {
    #[serde(default = "default_card_endpoint")]
    pub card_endpoint: String,
    #[serde(default = "default_bin_endpoint")]
    pub bin_endpoint: String,
    #[serde(default = "default_card_count")]
    pub card_count: u32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Additional country -> flag entries on top of the built-in table.
    #[serde(default)]
    pub extra_flags: HashMap<String, String>,
}

impl Default for BinLookupConfig {
    fn default() -> Self {
        Self {
            card_endpoint: default_card_endpoint(),
            bin_endpoint: default_bin_endpoint(),
            card_count: default_card_count(),
            request_timeout_secs: default_request_timeout_secs(),
            extra_flags: HashMap::new(),
        }
    }
}

impl BinLookupConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageConfig {
    #[serde(default = "default_image_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_image_count")]
    pub count: usize,
    #[serde(default = "default_image_side")]
    pub width: u32,
    #[serde(default = "default_image_side")]
    pub height: u32,
    #[serde(default = "default_image_model")]
    pub model: String,
    #[serde(default = "default_download_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_image_retries")]
    pub retries: u32,
    #[serde(default)]
    pub retry_delay_ms: u64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            endpoint: default_image_endpoint(),
            count: default_image_count(),
            width: default_image_side(),
            height: default_image_side(),
            model: default_image_model(),
            timeout_secs: default_download_timeout_secs(),
            retries: default_image_retries(),
            retry_delay_ms: 0,
        }
    }
}

impl ImageConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScreenshotConfig {
    #[serde(default = "default_screenshot_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_download_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        Self {
            endpoint: default_screenshot_endpoint(),
            timeout_secs: default_download_timeout_secs(),
        }
    }
}

impl ScreenshotConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub telegram: TelegramConfig,

    #[serde(default)]
    pub bin_lookup: BinLookupConfig,

    #[serde(default)]
    pub image: ImageConfig,

    #[serde(default)]
    pub screenshot: ScreenshotConfig,
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_card_endpoint() -> String {
    DEFAULT_CARD_ENDPOINT.to_string()
}
fn default_bin_endpoint() -> String {
    DEFAULT_BIN_ENDPOINT.to_string()
}
fn default_card_count() -> u32 {
    10
}
fn default_request_timeout_secs() -> u64 {
    15
}
fn default_image_endpoint() -> String {
    DEFAULT_IMAGE_ENDPOINT.to_string()
}
fn default_image_count() -> usize {
    3
}
fn default_image_side() -> u32 {
    1024
}
fn default_image_model() -> String {
    "flux-pro".to_string()
}
fn default_download_timeout_secs() -> u64 {
    30
}
fn default_image_retries() -> u32 {
    3
}
fn default_screenshot_endpoint() -> String {
    DEFAULT_SCREENSHOT_ENDPOINT.to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl RelayConfig {
    /// Load config from a TOML file.
    ///
    /// A missing file is not an error: defaults are returned and environment overrides
    /// are expected to supply the token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            warn!("Failed to read config file {}: {}", path.display(), e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let config: RelayConfig = toml::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config file {}: {}", path.display(), e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Load a `.env` file from the working directory, if there is one.
    ///
    /// Existing process variables win over `.env` entries.
    pub fn load_dotenv() {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded .env from: {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => warn!("Failed to parse .env: {}", e),
        }
    }

    /// Apply `RELAY_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(ENV_BOT_TOKEN) {
            self.telegram.bot_token = RedactedToken::new(token);
        }
        if let Some(url) = lookup(ENV_CARD_ENDPOINT) {
            self.bin_lookup.card_endpoint = url;
        }
        if let Some(url) = lookup(ENV_BIN_ENDPOINT) {
            self.bin_lookup.bin_endpoint = url;
        }
        if let Some(url) = lookup(ENV_IMAGE_ENDPOINT) {
            self.image.endpoint = url;
        }
        if let Some(url) = lookup(ENV_SCREENSHOT_ENDPOINT) {
            self.screenshot.endpoint = url;
        }
        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            self.bin_lookup.request_timeout_secs =
                raw.trim().parse().map_err(|e| ConfigError::EnvError {
                    location: ErrorLocation::from(Location::caller()),
                    key: ENV_REQUEST_TIMEOUT_SECS.to_string(),
                    reason: format!("{raw:?} is not a number of seconds: {e}"),
                })?;
        }

        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_endpoint("bin_lookup.card_endpoint", &self.bin_lookup.card_endpoint)?;
        validate_endpoint("bin_lookup.bin_endpoint", &self.bin_lookup.bin_endpoint)?;
        validate_endpoint("image.endpoint", &self.image.endpoint)?;
        validate_endpoint("screenshot.endpoint", &self.screenshot.endpoint)?;

        if self.bin_lookup.request_timeout_secs == 0 {
            return Err(validation_error(
                "bin_lookup.request_timeout_secs must be greater than 0",
            ));
        }

        if self.bin_lookup.card_count == 0 {
            return Err(validation_error("bin_lookup.card_count must be greater than 0"));
        }

        if self.image.count == 0 || self.image.count > MAX_IMAGE_COUNT {
            return Err(validation_error(format!(
                "image.count must be 1-{MAX_IMAGE_COUNT}, got {}",
                self.image.count
            )));
        }

        if self.image.width == 0 || self.image.height == 0 {
            return Err(validation_error("image.width and image.height must be non-zero"));
        }

        if self.image.retries == 0 {
            return Err(validation_error("image.retries must be at least 1"));
        }

        if self.image.timeout_secs == 0 || self.screenshot.timeout_secs == 0 {
            return Err(validation_error("download timeouts must be greater than 0"));
        }

        for (country, flag) in &self.bin_lookup.extra_flags {
            if country.trim().is_empty() || flag.trim().is_empty() {
                return Err(validation_error(
                    "bin_lookup.extra_flags entries need a country and a flag",
                ));
            }
        }

        Ok(())
    }

    /// The bot token, or an error if none was configured.
    pub fn require_token(&self) -> Result<&RedactedToken, ConfigError> {
        if self.telegram.bot_token.is_empty() {
            return Err(validation_error(format!(
                "telegram.bot_token is not set (config file or {ENV_BOT_TOKEN})"
            )));
        }

        Ok(&self.telegram.bot_token)
    }
}

#[track_caller]
fn validation_error(reason: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: reason.into(),
    }
}

#[track_caller]
fn validate_endpoint(field: &str, raw: &str) -> Result<(), ConfigError> {
    if raw.is_empty() {
        return Err(validation_error(format!("{field} cannot be empty")));
    }

    let url = Url::parse(raw)
        .map_err(|e| validation_error(format!("{field} is not a valid URL ({raw}): {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(validation_error(format!(
            "{field} must use http:// or https://, got {raw}"
        )));
    }

    Ok(())
}
