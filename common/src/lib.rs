//! Shared building blocks for the relay bot workspace.
//!
//! This crate holds the small types every other crate leans on: source
//! location tracking for errors, HTTP status classification and a secret
//! wrapper for the bot token.
//!
//! ## Architecture
//!
//! - **common** (this crate): Error plumbing and secrets
//! - **models**: Pure data passed between layers
//! - **relay-core**: Upstream API clients and response formatting
//! - **relay-bot**: Telegram wiring

pub mod error;
pub mod http_status;
pub mod redacted_token;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;
