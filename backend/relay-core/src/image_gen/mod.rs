//! Prompt-to-image relay for `/img`.
//!
//! Each image is a GET against the image endpoint with the prompt as the last path
//! segment and a random seed, so repeated prompts yield different pictures.

use crate::config::ImageConfig;
use crate::error::{ClientError, ImageError};
use crate::http::{build_client, parse_endpoint};

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;
use std::time::Duration;

use backoff::backoff::{Backoff, Constant};
use futures_util::future::try_join_all;
use log::{debug, info, warn};
use rand::Rng;
use reqwest::Client;
use tokio::time::sleep as TokioSleep;
use url::Url;

pub const SEED_MIN: u64 = 1_000_000_000;
pub const SEED_MAX: u64 = 9_999_999_999;

/// One attempt's failure, split by whether another attempt may help.
enum AttemptError {
    Transient(reqwest::Error),
    Fatal(ImageError),
}

/// Constant delay between attempts, exhausted once `attempts` tries have been used.
pub(crate) struct RetryBackoff {
    delay: Constant,
    remaining: u32,
}

impl RetryBackoff {
    pub(crate) fn new(delay: Duration, attempts: u32) -> Self {
        Self {
            delay: Constant::new(delay),
            remaining: attempts.saturating_sub(1),
        }
    }
}

impl Backoff for RetryBackoff {
    fn next_backoff(&mut self) -> Option<Duration> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.delay.next_backoff()
    }
}

#[derive(Debug, Clone)]
pub struct ImageGenerator {
    endpoint: Url,
    client: Client,
    count: usize,
    width: u32,
    height: u32,
    model: String,
    retries: u32,
    retry_delay: Duration,
}

impl ImageGenerator {
    pub fn new(config: &ImageConfig) -> Result<Self, ClientError> {
        let mut endpoint = parse_endpoint(&config.endpoint)?;

        // Prompts are appended as a path segment; make sure the base path keeps its last part.
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }

        Ok(Self {
            endpoint,
            client: build_client(config.timeout())?,
            count: config.count,
            width: config.width,
            height: config.height,
            model: config.model.clone(),
            retries: config.retries,
            retry_delay: config.retry_delay(),
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Random seed in `[SEED_MIN, SEED_MAX]`.
    pub fn random_seed() -> u64 {
        rand::rng().random_range(SEED_MIN..=SEED_MAX)
    }

    /// URL for a single image of `prompt` with a fixed `seed`.
    #[track_caller]
    pub fn prompt_url(&self, prompt: &str, seed: u64) -> Result<Url, ImageError> {
        let mut url = self.endpoint.clone();

        url.path_segments_mut()
            .map_err(|_| ImageError::Request {
                message: format!("Image endpoint cannot take a path: {}", self.endpoint),
                location: ErrorLocation::from(Location::caller()),
            })?
            .pop_if_empty()
            .push(prompt);

        url.query_pairs_mut()
            .append_pair("width", &self.width.to_string())
            .append_pair("height", &self.height.to_string())
            .append_pair("seed", &seed.to_string())
            .append_pair("nologo", "true")
            .append_pair("model", &self.model);

        Ok(url)
    }

    /// Download one image, retrying timeouts and connection failures.
    ///
    /// Attempts are bounded by the configured retry count and spaced by a constant delay.
    /// Status errors are returned immediately.
    pub async fn download(&self, url: &Url) -> Result<Vec<u8>, ImageError> {
        let mut backoff = RetryBackoff::new(self.retry_delay, self.retries);
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            match self.try_download(url).await {
                Ok(bytes) => {
                    debug!("Downloaded {} bytes on attempt {attempt}", bytes.len());
                    return Ok(bytes);
                }
                Err(AttemptError::Fatal(e)) => return Err(e),
                Err(AttemptError::Transient(e)) => match backoff.next_backoff() {
                    Some(delay) => {
                        warn!(
                            "Image download attempt {attempt}/{} failed: {e}; retrying after {delay:?}",
                            self.retries
                        );
                        TokioSleep(delay).await;
                    }
                    None => {
                        return Err(ImageError::Download {
                            message: e.to_string(),
                            attempts: attempt,
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                },
            }
        }
    }

    async fn try_download(&self, url: &Url) -> Result<Vec<u8>, AttemptError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(classify)?;

        let status = HttpStatusCode::from(response.status().as_u16());
        if !status.is_success() {
            return Err(AttemptError::Fatal(ImageError::UpstreamStatus {
                status,
                location: ErrorLocation::from(Location::caller()),
            }));
        }

        let bytes = response.bytes().await.map_err(classify)?;
        Ok(bytes.to_vec())
    }

    /// Generate the configured number of images for `prompt`, in order.
    ///
    /// Downloads run concurrently; the first failure fails the whole batch.
    pub async fn generate(&self, prompt: &str) -> Result<Vec<Vec<u8>>, ImageError> {
        let urls = (0..self.count)
            .map(|_| self.prompt_url(prompt, Self::random_seed()))
            .collect::<Result<Vec<_>, _>>()?;

        info!("Generating {} image(s) for prompt {prompt:?}", urls.len());

        try_join_all(urls.iter().map(|url| self.download(url))).await
    }
}

fn classify(error: reqwest::Error) -> AttemptError {
    if error.is_timeout() || error.is_connect() {
        AttemptError::Transient(error)
    } else {
        AttemptError::Fatal(ImageError::Request {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
