use async_trait::async_trait;

use super::MeetingBooker;

/// The unauthenticated side of a booking backend.
///
/// Implementations hold account credentials and can do exactly one thing:
/// exchange them for an authenticated [`MeetingBooker`] session. Booking is
/// unreachable without going through this handshake first.
#[async_trait]
pub trait BookingProvider: Send + Sync {
    async fn authenticate(&self) -> Result<Box<dyn MeetingBooker>, AuthenticationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("token request failed: {0}")]
    ApiRequestFailed(String),
    #[error("token request denied: status {status}: {body}")]
    Denied { status: u16, body: String },
    #[error("invalid token response: {0}")]
    InvalidResponse(String),
}
