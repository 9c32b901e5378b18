use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// A failed call to the card generator or the BIN lookup service.
///
/// Fetchers return this instead of propagating; the response formatter decides how it is shown.
#[derive(Debug, ThisError)]
pub enum FetchError {
    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("Upstream Status Error: {status} {location}")]
    UpstreamStatus {
        status: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl FetchError {
    /// Location-free text for chat replies.
    pub fn description(&self) -> String {
        match self {
            FetchError::Transport { message, .. } => message.clone(),
            FetchError::UpstreamStatus { status, .. } => format!("API error: {status}"),
            FetchError::Decode { message, .. } => format!("API error: {message}"),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        FetchError::Transport {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        FetchError::Decode {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<tokio::task::JoinError> for FetchError {
    #[track_caller]
    fn from(error: tokio::task::JoinError) -> Self {
        FetchError::Transport {
            message: format!("fetch task failed: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
