use crate::config::Config;
use crate::errors::MyError;
use crate::handlers::commands::{help::help_handler, start::start_handler};
use crate::util::enums::Command;
use log::error;
use std::sync::Arc;
use teloxide::Bot;
use teloxide::prelude::Message;
use tokio::task;

pub(crate) async fn command_handlers(
    bot: Bot,
    message: Message,
    cmd: Command,
    config: Arc<Config>,
) -> Result<(), MyError> {
    task::spawn(async move {
        let result = match cmd {
            Command::Start => start_handler(bot, message, &config).await,
            Command::Help => help_handler(bot, message, &config).await,
        };
        if let Err(e) = result {
            error!("Command handler failed: {:?}", e);
        }
    });
    Ok(())
}
