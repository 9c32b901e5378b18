use crate::commands::first_argument;
use crate::error::BotError;
use crate::state::BotState;

use relay_core::bin_lookup::normalize;

use log::info;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ParseMode};

pub const MISSING_BIN_MESSAGE: &str = "❌ Please provide a BIN like /gen 457173";
pub const INVALID_BIN_MESSAGE: &str = "❌ Invalid BIN format.";

pub async fn handle(bot: &Bot, msg: &Message, state: &BotState, args: &str) -> Result<(), BotError> {
    let Some(raw) = first_argument(args) else {
        bot.send_message(msg.chat.id, MISSING_BIN_MESSAGE).await?;
        return Ok(());
    };

    let bin = match normalize(raw) {
        Ok(bin) => bin,
        Err(e) => {
            info!("Rejected /gen input: {e}");
            bot.send_message(msg.chat.id, INVALID_BIN_MESSAGE).await?;
            return Ok(());
        }
    };

    bot.send_chat_action(msg.chat.id, ChatAction::Typing).await?;

    let reply = state.bin_lookup.fetch(bin).await.render();

    bot.send_message(msg.chat.id, reply)
        .parse_mode(ParseMode::Html)
        .await?;

    Ok(())
}
