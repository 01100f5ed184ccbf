use crate::config::Config;
use crate::errors::MyError;
use teloxide::prelude::*;
use teloxide::types::{ParseMode, ReplyParameters};

pub async fn start_handler(bot: Bot, message: Message, config: &Config) -> Result<(), MyError> {
    let limit_mb = config.get_max_file_size() / (1024 * 1024);

    let response_message = format!(
        "🎙️ <b>Bot de Transcripción de Audio</b>\n\n\
        Envíame una nota de voz o un archivo de audio (MP3, M4A, WAV, OGG…) \
        y te devolveré la transcripción en texto usando Whisper de OpenAI.\n\n\
        📌 <b>Límite:</b> {} MB por archivo.\n\
        🌐 <b>Idioma:</b> Detección automática.",
        limit_mb
    );

    bot.send_message(message.chat.id, response_message)
        .reply_parameters(ReplyParameters::new(message.id))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}
