use crate::commands::first_argument;
use crate::error::BotError;
use crate::state::BotState;

use relay_core::screenshot::{PDF_FILE_NAME, is_supported_target};

use log::{info, warn};
use teloxide::prelude::*;
use teloxide::types::{ChatAction, InputFile};

pub const MISSING_URL_MESSAGE: &str = "❌ Please provide a URL like /site https://example.com";
pub const INVALID_URL_MESSAGE: &str = "⚠️ Invalid URL. Must start with http:// or https://";

/// Why a `/site` argument was refused, as the reply to send.
pub fn target_argument(args: &str) -> Result<&str, &'static str> {
    let target = first_argument(args).ok_or(MISSING_URL_MESSAGE)?;

    if !is_supported_target(target) {
        return Err(INVALID_URL_MESSAGE);
    }

    Ok(target)
}

pub fn document_caption(target: &str) -> String {
    format!("📄 Full page screenshot PDF of: {target}")
}

pub fn failure_message(description: &str) -> String {
    format!("❌ Failed to generate PDF. Error: {description}")
}

pub async fn handle(bot: &Bot, msg: &Message, state: &BotState, args: &str) -> Result<(), BotError> {
    let target = match target_argument(args) {
        Ok(target) => target,
        Err(reply) => {
            bot.send_message(msg.chat.id, reply).await?;
            return Ok(());
        }
    };

    bot.send_chat_action(msg.chat.id, ChatAction::UploadDocument)
        .await?;

    let pdf = match state.screenshots.render_pdf(target).await {
        Ok(pdf) => pdf,
        Err(e) => {
            warn!("PDF for {target} failed: {e}");
            bot.send_message(msg.chat.id, failure_message(&e.description()))
                .await?;
            return Ok(());
        }
    };

    bot.send_document(msg.chat.id, InputFile::memory(pdf).file_name(PDF_FILE_NAME))
        .caption(document_caption(target))
        .await?;

    info!("Sent PDF of {target} to chat {}", msg.chat.id.0);
    Ok(())
}
