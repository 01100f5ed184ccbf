use crate::errors::MyError;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Request-scoped audio file under the OS temp directory. The file is
/// removed when the guard drops, on success and failure alike.
pub struct StagedAudio {
    path: PathBuf,
}

impl StagedAudio {
    pub fn acquire(file_name: &str) -> Self {
        let safe_name = file_name.replace(['/', '\\'], "_");
        let path = std::env::temp_dir().join(format!("{}_{}", Uuid::new_v4(), safe_name));
        StagedAudio { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn write(&self, data: &[u8]) -> Result<(), MyError> {
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }

    pub async fn read(&self) -> Result<Vec<u8>, MyError> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}

impl Drop for StagedAudio {
    fn drop(&mut self) {
        // May never have been written, or may already be gone.
        let _ = std::fs::remove_file(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::StagedAudio;

    #[test]
    fn identical_hints_get_distinct_paths() {
        let a = StagedAudio::acquire("voice.ogg");
        let b = StagedAudio::acquire("voice.ogg");
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn path_separators_in_hints_are_neutralized() {
        let staged = StagedAudio::acquire("../evil/voice.ogg");
        assert_eq!(
            staged.path().parent(),
            StagedAudio::acquire("voice.ogg").path().parent()
        );
    }

    #[tokio::test]
    async fn drop_removes_the_staged_file() {
        let staged = StagedAudio::acquire("voice.ogg");
        staged.write(b"fake ogg bytes").await.unwrap();
        let path = staged.path().to_path_buf();
        assert!(path.exists());

        drop(staged);
        assert!(!path.exists());
    }

    #[test]
    fn drop_without_a_written_file_is_harmless() {
        let staged = StagedAudio::acquire("voice.ogg");
        drop(staged);
    }
}
