mod booking_provider;
mod meeting_booker;
mod meeting_extractor;
mod transcription_engine;

pub use booking_provider::{AuthenticationError, BookingProvider};
pub use meeting_booker::{BookingError, MeetingBooker};
pub use meeting_extractor::{ExtractionError, MeetingExtractor};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
