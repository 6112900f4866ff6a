pub mod audio;
pub mod booking;
pub mod llm;
pub mod observability;
