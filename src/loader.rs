use crate::config::Config;
use crate::handlers::commander::command_handlers;
use crate::handlers::messages::messager::{handle_speech, handle_text};
use crate::util::enums::Command;
use log::info;
use std::sync::Arc;
use teloxide::dispatching::{Dispatcher, HandlerExt, MessageFilterExt, UpdateFilterExt};
use teloxide::dptree;
use teloxide::prelude::Requester;
use teloxide::types::{Message, Update};
use teloxide::utils::command::BotCommands;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

pub async fn run() -> Result<(), Error> {
    let config = Arc::new(Config::new());
    let bot = config.get_bot().clone();

    bot.set_my_commands(Command::bot_commands()).await?;

    let command_handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(command_handlers);

    let message_handler = Update::filter_message()
        .branch(Message::filter_voice().endpoint(handle_speech))
        .branch(Message::filter_audio().endpoint(handle_speech))
        .branch(Message::filter_document().endpoint(handle_speech))
        .branch(Message::filter_video_note().endpoint(handle_speech))
        .branch(Message::filter_text().endpoint(handle_text));

    let handlers = dptree::entry()
        .branch(command_handler)
        .branch(message_handler);

    let me = bot.get_me().await?;
    info!("Bot name: {:?}. Waiting for messages...", me.username());

    Dispatcher::builder(bot, handlers)
        .dependencies(dptree::deps![config])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    Ok(())
}
