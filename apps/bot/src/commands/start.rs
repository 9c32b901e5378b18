use crate::error::BotError;

use teloxide::prelude::*;

pub const WELCOME_TEXT: &str = "👋 Hello! Welcome to the bot.\n\n\
Here are the commands you can use:\n\
➡️ /gen <bin> - Generate credit card data for a BIN.\n\
➡️ /img <prompt> - Generate images from a prompt.\n\
➡️ /site <url> - Get a full-page screenshot of a website as a PDF.\n\n\
Example:\n\
/gen 457173\n\
/img a girl with rolex watch\n\
/site https://example.com\n";

pub async fn handle(bot: &Bot, msg: &Message) -> Result<(), BotError> {
    bot.send_message(msg.chat.id, WELCOME_TEXT).await?;
    Ok(())
}
