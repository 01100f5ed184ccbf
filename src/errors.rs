use std::io;
use teloxide::RequestError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MyError {
    #[error("Teloxide API Error: {0}")]
    Teloxide(#[from] RequestError),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO Error: {0}")]
    Io(#[from] io::Error),

    #[error("Whisper API Error: {0}")]
    Whisper(String),
}
