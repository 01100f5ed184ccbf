use crate::config::Config;
use crate::errors::MyError;
use crate::handlers::messages::sound::audio::audio_handler;
use crate::handlers::messages::sound::document::document_handler;
use crate::handlers::messages::sound::video_note::video_note_handler;
use crate::handlers::messages::sound::voice::voice_handler;
use crate::util::enums::SoundKind;
use crate::util::transcription::classify_media;
use teloxide::Bot;
use teloxide::prelude::Message;

pub(crate) async fn sound_handlers(
    bot: Bot,
    message: Message,
    config: &Config,
) -> Result<(), MyError> {
    let Some(media) = classify_media(&message) else {
        return Ok(());
    };

    match media.kind {
        SoundKind::Voice => voice_handler(bot, message, media, config).await,
        SoundKind::Audio => audio_handler(bot, message, media, config).await,
        SoundKind::AudioDocument => document_handler(bot, message, media, config).await,
        SoundKind::VideoNote => video_note_handler(bot, message, media, config).await,
    }
}
