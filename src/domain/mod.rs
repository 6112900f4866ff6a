mod audio_source;
mod meeting_details;
mod meeting_record;
mod transcript;

pub use audio_source::AudioSource;
pub use meeting_details::MeetingDetails;
pub use meeting_record::MeetingRecord;
pub use transcript::Transcript;
