mod health;
mod schedule;

pub use health::health_handler;
pub use schedule::schedule_meeting_handler;
