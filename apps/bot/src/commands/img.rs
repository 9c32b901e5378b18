use crate::error::BotError;
use crate::state::BotState;

use log::{info, warn};
use teloxide::prelude::*;
use teloxide::RequestError;
use teloxide::types::{ChatAction, InputFile, InputMedia, InputMediaPhoto};

pub const MISSING_PROMPT_MESSAGE: &str =
    "⚠️ Use a prompt after /img command!\nExample: /img a girl with rolex watch";

/// All arguments joined by single spaces.
pub fn prompt_argument(args: &str) -> Option<String> {
    let prompt = args.split_whitespace().collect::<Vec<_>>().join(" ");
    (!prompt.is_empty()).then_some(prompt)
}

/// Caption for the image at zero-based `index`.
pub fn image_caption(index: usize, prompt: &str) -> String {
    format!("🌟 Image {} for: {prompt}", index + 1)
}

pub fn failure_message(description: &str) -> String {
    format!("❌ Failed to generate image: {description}")
}

pub async fn handle(bot: &Bot, msg: &Message, state: &BotState, args: &str) -> Result<(), BotError> {
    let Some(prompt) = prompt_argument(args) else {
        bot.send_message(msg.chat.id, MISSING_PROMPT_MESSAGE).await?;
        return Ok(());
    };

    bot.send_chat_action(msg.chat.id, ChatAction::UploadPhoto)
        .await?;

    let images = match state.images.generate(&prompt).await {
        Ok(images) => images,
        Err(e) => {
            warn!("Image generation for {prompt:?} failed: {e}");
            bot.send_message(msg.chat.id, failure_message(&e.description()))
                .await?;
            return Ok(());
        }
    };

    let sent = send_images(bot, msg, &prompt, images).await;
    if let Err(e) = sent {
        warn!("Sending images to chat {} failed: {e}", msg.chat.id.0);
        bot.send_message(msg.chat.id, failure_message(&e.to_string()))
            .await?;
        return Ok(());
    }

    info!("Sent images for prompt {prompt:?} to chat {}", msg.chat.id.0);
    Ok(())
}

/// A media group needs at least two items; a single image goes out as a photo.
async fn send_images(
    bot: &Bot,
    msg: &Message,
    prompt: &str,
    mut images: Vec<Vec<u8>>,
) -> Result<(), RequestError> {
    if images.len() == 1 {
        let image = images.remove(0);
        bot.send_photo(msg.chat.id, InputFile::memory(image))
            .caption(image_caption(0, prompt))
            .await?;
        return Ok(());
    }

    let media = images
        .into_iter()
        .enumerate()
        .map(|(index, image)| {
            InputMedia::Photo(
                InputMediaPhoto::new(InputFile::memory(image)).caption(image_caption(index, prompt)),
            )
        })
        .collect::<Vec<_>>();

    bot.send_media_group(msg.chat.id, media).await?;
    Ok(())
}
