pub mod audio;
pub mod document;
pub mod video_note;
pub mod voice;
