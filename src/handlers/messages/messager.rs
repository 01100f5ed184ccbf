use crate::config::Config;
use crate::errors::MyError;
use crate::handlers::messages::sounder::sound_handlers;
use log::error;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{ParseMode, ReplyParameters};
use tokio::task;

pub async fn handle_speech(
    bot: Bot,
    message: Message,
    config: Arc<Config>,
) -> Result<(), MyError> {
    task::spawn(async move {
        let from_bot = message.from.as_ref().is_some_and(|user| user.is_bot);
        if from_bot || message.forward_from_user().is_some_and(|orig| orig.is_bot) {
            return;
        }

        if let Err(e) = sound_handlers(bot, message, &config).await {
            error!("Sound handler failed: {:?}", e);
        }
    });
    Ok(())
}

pub async fn handle_text(bot: Bot, message: Message) -> Result<(), MyError> {
    if message.text().is_some_and(|text| text.starts_with('/')) {
        return Ok(());
    }

    bot.send_message(
        message.chat.id,
        "🎙️ Envíame una <b>nota de voz</b> o un <b>archivo de audio</b> para transcribirlo.",
    )
    .reply_parameters(ReplyParameters::new(message.id))
    .parse_mode(ParseMode::Html)
    .await?;
    Ok(())
}
