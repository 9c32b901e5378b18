pub mod bin;
pub mod client;
pub mod config;
pub mod fetch;
pub mod image;
pub mod screenshot;

pub use bin::BinError;
pub use client::ClientError;
pub use config::ConfigError;
pub use fetch::FetchError;
pub use image::ImageError;
pub use screenshot::ScreenshotError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Client(#[from] client::ClientError),
}
