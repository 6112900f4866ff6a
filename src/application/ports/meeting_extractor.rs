use async_trait::async_trait;

use crate::domain::{MeetingDetails, Transcript};

#[async_trait]
pub trait MeetingExtractor: Send + Sync {
    async fn extract(&self, transcript: &Transcript) -> Result<MeetingDetails, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited by extraction api")]
    RateLimited,
    #[error("invalid extraction response: {0}")]
    InvalidResponse(String),
}
