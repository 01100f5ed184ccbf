use teloxide::macros::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Qué hace el bot y cómo usarlo")]
    Start,
    #[command(description = "Ayuda paso a paso")]
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Voice,
    Audio,
    AudioDocument,
    VideoNote,
}

impl SoundKind {
    pub fn default_file_name(self) -> &'static str {
        match self {
            SoundKind::Voice => "voice.ogg",
            SoundKind::Audio => "audio.mp3",
            SoundKind::AudioDocument => "audio.bin",
            SoundKind::VideoNote => "video_note.mp4",
        }
    }

    pub fn default_mime_type(self) -> &'static str {
        match self {
            SoundKind::Voice => "audio/ogg",
            SoundKind::VideoNote => "video/mp4",
            SoundKind::Audio | SoundKind::AudioDocument => "application/octet-stream",
        }
    }
}

pub fn is_audio_mime(essence: &str) -> bool {
    essence.starts_with("audio/")
}

#[derive(Debug, Clone)]
pub struct InboundMedia {
    pub kind: SoundKind,
    pub file_id: String,
    pub file_size: Option<u64>,
    pub file_name: String,
    pub mime_type: String,
}

impl InboundMedia {
    /// Declared size in bytes when it is known and exceeds `limit`.
    /// Telegram does not always report a size; an unknown size passes the
    /// gate and is left to the provider's own limit.
    pub fn oversize(&self, limit: u64) -> Option<u64> {
        self.file_size.filter(|&size| size > limit)
    }
}
