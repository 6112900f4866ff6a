use std::sync::Arc;

use crate::application::ports::{
    AuthenticationError, BookingError, BookingProvider, ExtractionError, MeetingBooker,
    MeetingExtractor, TranscriptionEngine, TranscriptionError,
};
use crate::domain::{AudioSource, MeetingRecord};

pub struct SchedulingService<T, X, B>
where
    T: TranscriptionEngine,
    X: MeetingExtractor,
    B: BookingProvider,
{
    transcription_engine: Arc<T>,
    meeting_extractor: Arc<X>,
    booking_provider: Arc<B>,
}

impl<T, X, B> SchedulingService<T, X, B>
where
    T: TranscriptionEngine,
    X: MeetingExtractor,
    B: BookingProvider,
{
    pub fn new(
        transcription_engine: Arc<T>,
        meeting_extractor: Arc<X>,
        booking_provider: Arc<B>,
    ) -> Self {
        Self {
            transcription_engine,
            meeting_extractor,
            booking_provider,
        }
    }

    /// Runs the memo-to-meeting pipeline: transcribe the audio, extract the
    /// scheduling fields, then authenticate and book. The first failing
    /// stage aborts the run; later stages are never attempted.
    pub async fn schedule(&self, audio: &AudioSource) -> Result<MeetingRecord, SchedulingError> {
        let transcript = self.transcription_engine.transcribe(audio).await?;

        let details = self.meeting_extractor.extract(&transcript).await?;

        let booker = self.booking_provider.authenticate().await?;

        let record = booker
            .book(&details.start_timestamp, details.duration_minutes)
            .await?;

        Ok(record)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchedulingError {
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("authentication: {0}")]
    Authentication(#[from] AuthenticationError),
    #[error("booking: {0}")]
    Booking(#[from] BookingError),
}

impl SchedulingError {
    /// Stable tag naming the pipeline stage that failed.
    pub fn kind(&self) -> &'static str {
        match self {
            SchedulingError::Transcription(_) => "transcription_error",
            SchedulingError::Extraction(_) => "extraction_error",
            SchedulingError::Authentication(_) => "authentication_error",
            SchedulingError::Booking(_) => "booking_error",
        }
    }
}
