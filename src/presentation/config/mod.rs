mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{LoggingSettings, OpenAiSettings, ServerSettings, Settings, ZoomSettings};
