use crate::util::transcription::Whisper;
use dotenv::dotenv;
use log::error;
use teloxide::prelude::*;

const MAX_FILE_SIZE_MB: u64 = 25;
const MAX_MESSAGE_LEN: usize = 4000;

#[derive(Clone)]
pub struct Config {
    bot: Bot,
    whisper: Whisper,
    max_file_size: u64,
    max_message_len: usize,
}

impl Config {
    pub fn new() -> Self {
        dotenv().ok();

        let Ok(bot_token) = std::env::var("BOT_TOKEN") else {
            error!("Expected BOT_TOKEN env var");
            std::process::exit(1);
        };
        let Ok(openai_api_key) = std::env::var("OPENAI_API_KEY") else {
            error!("OPENAI_API_KEY expected");
            std::process::exit(1);
        };

        let bot = Bot::new(bot_token);
        let whisper = Whisper::new(
            openai_api_key,
            std::env::var("OPENAI_BASE_URL").ok(),
            std::env::var("WHISPER_MODEL").ok(),
        );

        Config {
            bot,
            whisper,
            max_file_size: MAX_FILE_SIZE_MB * 1024 * 1024,
            max_message_len: MAX_MESSAGE_LEN,
        }
    }

    pub fn get_bot(&self) -> &Bot {
        &self.bot
    }

    pub fn get_whisper(&self) -> &Whisper {
        &self.whisper
    }

    pub fn get_max_file_size(&self) -> u64 {
        self.max_file_size
    }

    pub fn get_max_message_len(&self) -> usize {
        self.max_message_len
    }
}
