//! Telegram command routing.
//!
//! Each command runs as its own dispatcher task. Handlers report failures to the chat
//! where the user expects an answer and log everything else; an error never stops the
//! dispatcher.

pub mod cards;
pub mod img;
pub mod site;
pub mod start;

use crate::error::BotError;
use crate::state::BotState;

use std::sync::Arc;

use log::{debug, error};
use teloxide::RequestError;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::utils::command::{BotCommands, ParseError};

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "show the welcome message.")]
    Start,
    #[command(description = "generate cards for a BIN.", parse_with = rest_of_line)]
    Gen(String),
    #[command(description = "generate images from a prompt.", parse_with = rest_of_line)]
    Img(String),
    #[command(description = "full-page screenshot of a website as PDF.", parse_with = rest_of_line)]
    Site(String),
}

/// Hand the whole argument text to the handler, including an empty one.
fn rest_of_line(input: String) -> Result<(String,), ParseError> {
    Ok((input,))
}

/// First whitespace-separated argument, if any.
pub fn first_argument(args: &str) -> Option<&str> {
    args.split_whitespace().next()
}

pub fn build_handler() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .filter_command::<Command>()
        .endpoint(answer)
}

async fn answer(bot: Bot, msg: Message, cmd: Command, state: Arc<BotState>) -> ResponseResult<()> {
    debug!("Chat {} sent {cmd:?}", msg.chat.id.0);

    let result: Result<(), BotError> = match cmd {
        Command::Start => start::handle(&bot, &msg).await,
        Command::Gen(args) => cards::handle(&bot, &msg, &state, &args).await,
        Command::Img(args) => img::handle(&bot, &msg, &state, &args).await,
        Command::Site(args) => site::handle(&bot, &msg, &state, &args).await,
    };

    if let Err(e) = result {
        error!("Command in chat {} failed: {e}", msg.chat.id.0);
    }

    Ok(())
}
