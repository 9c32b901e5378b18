use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ScreenshotError {
    #[error("Screenshot Transport Error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("Screenshot Upstream Status Error: {status} {location}")]
    UpstreamStatus {
        status: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("Screenshot Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("PDF Render Error: {message} {location}")]
    Render {
        message: String,
        location: ErrorLocation,
    },
}

impl ScreenshotError {
    /// Location-free text for chat replies.
    pub fn description(&self) -> String {
        match self {
            ScreenshotError::UpstreamStatus { status, .. } => {
                format!("Screenshot API returned status {status}")
            }
            ScreenshotError::Transport { message, .. }
            | ScreenshotError::Decode { message, .. }
            | ScreenshotError::Render { message, .. } => message.clone(),
        }
    }
}

impl From<reqwest::Error> for ScreenshotError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ScreenshotError::Transport {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<image::ImageError> for ScreenshotError {
    #[track_caller]
    fn from(error: image::ImageError) -> Self {
        ScreenshotError::Decode {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<lopdf::Error> for ScreenshotError {
    #[track_caller]
    fn from(error: lopdf::Error) -> Self {
        ScreenshotError::Render {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for ScreenshotError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        ScreenshotError::Render {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
