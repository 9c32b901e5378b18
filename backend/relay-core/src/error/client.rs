use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures while constructing an upstream API client.
#[derive(Debug, ThisError)]
pub enum ClientError {
    #[error("HTTP Client Build Error: {message} {location}")]
    Build {
        message: String,
        location: ErrorLocation,
    },

    #[error("Endpoint Error: {message} {location}")]
    Endpoint {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ClientError::Build {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for ClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ClientError::Endpoint {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
