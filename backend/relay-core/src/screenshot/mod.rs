//! Website screenshot to single-page PDF for `/site`.

pub mod pdf;

pub use pdf::image_to_pdf;

use crate::config::ScreenshotConfig;
use crate::error::{ClientError, ScreenshotError};
use crate::http::{build_client, parse_endpoint};

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;
use std::sync::OnceLock;

use log::{debug, info, warn};
use regex::Regex;
use reqwest::Client;

pub const PDF_FILE_NAME: &str = "fullpage_screenshot.pdf";

const TARGET_URL_PATTERN: &str = r"^https?://";

static TARGET_URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_target_url_regex() -> &'static Regex {
    TARGET_URL_REGEX
        .get_or_init(|| Regex::new(TARGET_URL_PATTERN).expect("valid regex pattern"))
}

/// Whether `target` can be handed to the screenshot service.
pub fn is_supported_target(target: &str) -> bool {
    get_target_url_regex().is_match(target)
}

#[derive(Debug, Clone)]
pub struct ScreenshotClient {
    endpoint: String,
    client: Client,
}

impl ScreenshotClient {
    pub fn new(config: &ScreenshotConfig) -> Result<Self, ClientError> {
        parse_endpoint(&config.endpoint)?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client: build_client(config.timeout())?,
        })
    }

    /// The service takes the target URL verbatim after its base path.
    pub fn screenshot_url(&self, target: &str) -> String {
        format!("{}{}", self.endpoint, target)
    }

    /// Fetch the raw screenshot image bytes for `target`.
    pub async fn capture(&self, target: &str) -> Result<Vec<u8>, ScreenshotError> {
        let url = self.screenshot_url(target);
        debug!("Requesting screenshot of {target}");

        let response = self.client.get(&url).send().await?;
        let status = HttpStatusCode::from(response.status().as_u16());

        if !status.is_ok() {
            if status.is_server_error() {
                warn!("Screenshot service failed with {status} for {target}");
            } else if status.is_client_error() {
                debug!("Screenshot service rejected {target} with {status}");
            }
            return Err(ScreenshotError::UpstreamStatus {
                status,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// Screenshot `target` and wrap it in a one-page PDF.
    pub async fn render_pdf(&self, target: &str) -> Result<Vec<u8>, ScreenshotError> {
        let image = self.capture(target).await?;
        let pdf = image_to_pdf(&image)?;

        info!(
            "Rendered {} byte PDF from {} byte screenshot of {target}",
            pdf.len(),
            image.len()
        );
        Ok(pdf)
    }
}
