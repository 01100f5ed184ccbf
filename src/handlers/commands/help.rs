use crate::config::Config;
use crate::errors::MyError;
use teloxide::prelude::*;
use teloxide::types::{ParseMode, ReplyParameters};

pub async fn help_handler(bot: Bot, message: Message, _: &Config) -> Result<(), MyError> {
    bot.send_message(
        message.chat.id,
        "📖 <b>Ayuda</b>\n\n\
        • Envía una <b>nota de voz</b> directamente.\n\
        • Envía un <b>archivo de audio</b> (MP3, WAV, M4A, OGG, FLAC, WEBM).\n\
        • Recibirás un mensaje de \"Procesando…\" y luego la transcripción.\n\n\
        Si algo falla, recibirás el error detallado con pistas para solucionarlo.",
    )
    .reply_parameters(ReplyParameters::new(message.id))
    .parse_mode(ParseMode::Html)
    .await?;
    Ok(())
}
