use crate::config::Config;
use crate::errors::MyError;
use crate::util::enums::{InboundMedia, SoundKind, is_audio_mime};
use crate::util::failure::error_block;
use crate::util::split_text;
use crate::util::staging::StagedAudio;
use log::{debug, error, info};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use teloxide::prelude::*;
use teloxide::types::{FileId, ParseMode, ReplyParameters};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_WHISPER_MODEL: &str = "whisper-1";

const EMPTY_RESULT_TEXT: &str =
    "⚠️ La transcripción está vacía. El audio podría no contener voz reconocible.";

/// Picks the transcribable media out of a message, in priority order:
/// voice note, audio file, audio document, video note.
pub fn classify_media(msg: &Message) -> Option<InboundMedia> {
    if let Some(voice) = msg.voice() {
        Some(InboundMedia {
            kind: SoundKind::Voice,
            file_id: voice.file.id.0.to_owned(),
            file_size: Some(voice.file.size as u64),
            file_name: SoundKind::Voice.default_file_name().to_string(),
            mime_type: voice
                .mime_type
                .as_ref()
                .map(|m| m.essence_str().to_owned())
                .unwrap_or_else(|| SoundKind::Voice.default_mime_type().to_string()),
        })
    } else if let Some(audio) = msg.audio() {
        Some(InboundMedia {
            kind: SoundKind::Audio,
            file_id: audio.file.id.0.to_owned(),
            file_size: Some(audio.file.size as u64),
            file_name: audio
                .file_name
                .clone()
                .unwrap_or_else(|| SoundKind::Audio.default_file_name().to_string()),
            mime_type: audio
                .mime_type
                .as_ref()
                .map(|m| m.essence_str().to_owned())
                .unwrap_or_else(|| SoundKind::Audio.default_mime_type().to_string()),
        })
    } else if let Some(document) = msg.document()
        && let Some(mime) = document.mime_type.as_ref()
        && is_audio_mime(mime.essence_str())
    {
        Some(InboundMedia {
            kind: SoundKind::AudioDocument,
            file_id: document.file.id.0.to_owned(),
            file_size: Some(document.file.size as u64),
            file_name: document
                .file_name
                .clone()
                .unwrap_or_else(|| SoundKind::AudioDocument.default_file_name().to_string()),
            mime_type: mime.essence_str().to_owned(),
        })
    } else if let Some(video_note) = msg.video_note() {
        Some(InboundMedia {
            kind: SoundKind::VideoNote,
            file_id: video_note.file.id.0.to_owned(),
            file_size: Some(video_note.file.size as u64),
            file_name: SoundKind::VideoNote.default_file_name().to_string(),
            mime_type: SoundKind::VideoNote.default_mime_type().to_string(),
        })
    } else {
        None
    }
}

pub async fn save_file_to_staging(
    bot: &Bot,
    file_id: &str,
    staged: &StagedAudio,
) -> Result<(), MyError> {
    let file = bot.get_file(FileId(file_id.to_string())).send().await?;
    let file_url = format!(
        "https://api.telegram.org/file/bot{}/{}",
        bot.token(),
        file.path
    );
    let response = reqwest::get(file_url).await?.error_for_status()?;
    let data = response.bytes().await?;
    staged.write(&data).await?;
    debug!("Staged {} bytes at {}", data.len(), staged.path().display());
    Ok(())
}

#[derive(Clone)]
pub struct Whisper {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl Whisper {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Whisper {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| OPENAI_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_WHISPER_MODEL.to_string()),
        }
    }

    /// One multipart request, automatic language detection, no retries.
    pub async fn transcribe(
        &self,
        staged: &StagedAudio,
        media: &InboundMedia,
    ) -> Result<String, MyError> {
        let data = staged.read().await?;

        let file_part = Part::bytes(data)
            .file_name(media.file_name.clone())
            .mime_str(&media.mime_type)?;
        let form = Form::new()
            .text("model", self.model.clone())
            .part("file", file_part);

        debug!("Sending {} to Whisper as {}", media.file_name, media.mime_type);

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(MyError::Whisper(format!("status {status}: {body}")));
        }

        let transcript: TranscriptionResponse = response.json().await?;
        Ok(transcript.text.trim().to_string())
    }
}

pub async fn transcription_handler(
    bot: Bot,
    msg: Message,
    media: InboundMedia,
    config: &Config,
) -> Result<(), MyError> {
    let status = bot
        .send_message(msg.chat.id, "⏳ <b>Procesando audio…</b>")
        .reply_parameters(ReplyParameters::new(msg.id))
        .parse_mode(ParseMode::Html)
        .await
        .ok();
    let Some(status) = status else { return Ok(()) };

    if let Some(size) = media.oversize(config.get_max_file_size()) {
        bot.edit_message_text(
            status.chat.id,
            status.id,
            size_rejection_text(size, config.get_max_file_size()),
        )
        .await?;
        return Ok(());
    }

    match process_media(&bot, &msg, &media, &status, config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Transcription failed for {:?}: {:?}", media.kind, e);
            bot.edit_message_text(status.chat.id, status.id, error_block(&e.to_string()))
                .parse_mode(ParseMode::Html)
                .await?;
            Ok(())
        }
    }
}

async fn process_media(
    bot: &Bot,
    msg: &Message,
    media: &InboundMedia,
    status: &Message,
    config: &Config,
) -> Result<(), MyError> {
    let staged = StagedAudio::acquire(&media.file_name);
    save_file_to_staging(bot, &media.file_id, &staged).await?;

    let text = config.get_whisper().transcribe(&staged, media).await?;

    if text.is_empty() {
        bot.edit_message_text(status.chat.id, status.id, EMPTY_RESULT_TEXT)
            .await?;
        return Ok(());
    }

    let parts = split_text(&text, config.get_max_message_len());
    info!("Delivering transcription in {} part(s)", parts.len());
    for part in parts {
        bot.send_message(msg.chat.id, part)
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
    }
    bot.delete_message(status.chat.id, status.id).await?;
    Ok(())
}

fn size_rejection_text(size: u64, limit: u64) -> String {
    format!(
        "⚠️ El archivo supera el límite de {} MB permitido por Whisper.\nTamaño recibido: {:.1} MB.",
        limit / (1024 * 1024),
        size as f64 / (1024.0 * 1024.0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_text_reports_both_sizes_in_mb() {
        let text = size_rejection_text(30 * 1024 * 1024, 25 * 1024 * 1024);
        assert!(text.contains("25 MB"));
        assert!(text.contains("30.0 MB"));
    }

    #[test]
    fn rejection_text_keeps_one_decimal() {
        let text = size_rejection_text(26_843_546, 25 * 1024 * 1024);
        assert!(text.contains("25.6 MB"));
    }

    #[test]
    fn whisper_defaults_to_the_public_endpoint_and_model() {
        let whisper = Whisper::new("sk-test".to_string(), None, None);
        assert_eq!(whisper.base_url, OPENAI_BASE_URL);
        assert_eq!(whisper.model, DEFAULT_WHISPER_MODEL);
    }

    #[test]
    fn whisper_honours_overrides() {
        let whisper = Whisper::new(
            "sk-test".to_string(),
            Some("http://localhost:9000/v1".to_string()),
            Some("whisper-large-v3".to_string()),
        );
        assert_eq!(whisper.base_url, "http://localhost:9000/v1");
        assert_eq!(whisper.model, "whisper-large-v3");
    }
}
