use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum BinError {
    /// Input does not start with 6-16 ASCII digits. Raised before any network call.
    #[error("Invalid BIN Format Error: {input:?} {location}")]
    InvalidFormat {
        input: String,
        location: ErrorLocation,
    },
}
