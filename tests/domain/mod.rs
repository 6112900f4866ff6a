mod audio_source_test;
mod meeting_details_test;
