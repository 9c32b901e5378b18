use common::ErrorLocation;

use relay_core::error::{ClientError, ConfigError, CoreError};

use std::panic::Location;

use teloxide::RequestError;
use thiserror::Error;

/// Errors raised by the bot binary.
///
/// Command handlers log these and keep the dispatcher running; only startup errors end
/// the process.
#[derive(Debug, Error)]
pub enum BotError {
    /// Failure while preparing the process (log dir, logger, config)
    #[error("Startup Error: {message} {location}")]
    Startup {
        message: String,
        location: ErrorLocation,
    },

    /// Error from relay-core (config, HTTP client construction)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// Telegram Bot API call failed
    #[error("Telegram Error: {message} {location}")]
    Telegram {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ConfigError> for BotError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        BotError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for BotError {
    #[track_caller]
    fn from(error: ClientError) -> Self {
        BotError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for BotError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        BotError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<RequestError> for BotError {
    #[track_caller]
    fn from(error: RequestError) -> Self {
        BotError::Telegram {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
