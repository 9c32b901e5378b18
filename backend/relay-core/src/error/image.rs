use common::{ErrorLocation, HttpStatusCode};

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ImageError {
    /// Timeouts or connection failures on every allowed attempt.
    #[error("Image Download Error: {message} after {attempts} attempt(s) {location}")]
    Download {
        message: String,
        attempts: u32,
        location: ErrorLocation,
    },

    /// Any other transport failure. Not retried.
    #[error("Image Request Error: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
    },

    #[error("Image Upstream Status Error: {status} {location}")]
    UpstreamStatus {
        status: HttpStatusCode,
        location: ErrorLocation,
    },
}

impl ImageError {
    /// Location-free text for chat replies.
    pub fn description(&self) -> String {
        match self {
            ImageError::Download { message, .. } | ImageError::Request { message, .. } => {
                message.clone()
            }
            ImageError::UpstreamStatus { status, .. } => {
                format!("image API returned status {status}")
            }
        }
    }
}
