use crate::error::BotError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;

use clap::Parser;

const APP_DIR_NAME: &str = "relay-bot";

/// Telegram relay bot for BIN lookups, image prompts and website PDFs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config/relay-bot.toml")]
    pub config: PathBuf,

    /// Directory for the log file
    #[arg(long, env = "RELAY_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    /// The log directory given on the command line, or the platform data directory.
    #[track_caller]
    pub fn resolve_log_dir(&self) -> Result<PathBuf, BotError> {
        if let Some(dir) = &self.log_dir {
            return Ok(dir.clone());
        }

        dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| BotError::Startup {
                message: "No local data directory on this platform; pass --log-dir".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
