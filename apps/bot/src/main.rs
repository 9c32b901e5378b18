use relay_bot::cli::Args;
use relay_bot::commands::{Command, build_handler};
use relay_bot::error::BotError;
use relay_bot::logger::initialize as LoggerInitialize;
use relay_bot::state::BotState;

use relay_core::config::RelayConfig;

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::sync::Arc;

use clap::Parser;
use log::{info, warn};
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

#[tokio::main]
async fn main() -> Result<(), BotError> {
    let args = Args::parse();

    let log_dir = args.resolve_log_dir()?;
    create_dir_all(&log_dir).map_err(|e| BotError::Startup {
        message: format!("Failed to create log directory {}: {e}", log_dir.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir)?;

    info!("Relay bot starting");
    info!("Log directory: {}", log_dir.display());

    RelayConfig::load_dotenv();
    let mut config = RelayConfig::load(&args.config)?;
    config.apply_env_overrides()?;
    config.validate()?;
    let token = config.require_token()?;
    info!("Bot token configured");

    let state = Arc::new(BotState::from_config(&config)?);
    let bot = Bot::new(token.expose());

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!("Failed to register command list: {e}");
    }

    info!("Dispatcher starting");

    Dispatcher::builder(bot, build_handler())
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Relay bot stopped");
    Ok(())
}
