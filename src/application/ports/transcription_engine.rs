use async_trait::async_trait;

use crate::domain::{AudioSource, Transcript};

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio: &AudioSource) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio source unreadable: {0}")]
    SourceUnreadable(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("transcription produced no text")]
    EmptyTranscript,
}
