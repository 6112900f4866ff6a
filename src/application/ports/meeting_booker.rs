use async_trait::async_trait;

use crate::domain::MeetingRecord;

/// An authenticated booking session.
///
/// Values of this type only come out of [`BookingProvider::authenticate`],
/// so holding one proves the token handshake succeeded. The credential it
/// wraps lives exactly as long as the session.
///
/// [`BookingProvider::authenticate`]: super::BookingProvider::authenticate
#[async_trait]
pub trait MeetingBooker: Send + Sync {
    async fn book(
        &self,
        start_time: &str,
        duration_minutes: u32,
    ) -> Result<MeetingRecord, BookingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("booking rejected: status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("invalid booking response: {0}")]
    InvalidResponse(String),
}
