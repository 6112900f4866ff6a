use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub openai: OpenAiSettings,
    pub zoom: ZoomSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    pub api_key: String,
    /// Overrides `https://api.openai.com/v1`, mainly for tests.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub whisper_model: Option<String>,
    #[serde(default)]
    pub extraction_model: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZoomSettings {
    pub client_id: String,
    pub client_secret: String,
    pub account_id: String,
    #[serde(default)]
    pub auth_base_url: Option<String>,
    #[serde(default)]
    pub api_base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub enable_json: bool,
}

fn default_log_level() -> String {
    "info,voxbook=debug,tower_http=debug".to_string()
}

impl Settings {
    /// Layered load: optional `appsettings.<env>.toml` first, then
    /// `APP`-prefixed environment variables with `__` as the section
    /// separator (`APP__ZOOM__CLIENT_SECRET` maps to `zoom.client_secret`),
    /// so secrets stay out of the settings files.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}
