use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use voxbook::application::services::SchedulingService;
use voxbook::infrastructure::audio::OpenAiWhisperEngine;
use voxbook::infrastructure::booking::{ZoomBookingProvider, ZoomCredentials};
use voxbook::infrastructure::llm::OpenAiMeetingExtractor;
use voxbook::infrastructure::observability::{TracingConfig, init_tracing};
use voxbook::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".to_string())
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            json_format: settings.logging.enable_json,
            level: settings.logging.level.clone(),
        },
        settings.server.port,
    );

    let transcription_engine = Arc::new(OpenAiWhisperEngine::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        settings.openai.whisper_model.clone(),
    ));

    let meeting_extractor = Arc::new(OpenAiMeetingExtractor::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        settings.openai.extraction_model.clone(),
    ));

    let booking_provider = Arc::new(ZoomBookingProvider::new(
        ZoomCredentials {
            client_id: settings.zoom.client_id.clone(),
            client_secret: settings.zoom.client_secret.clone(),
            account_id: settings.zoom.account_id.clone(),
        },
        settings.zoom.auth_base_url.clone(),
        settings.zoom.api_base_url.clone(),
    ));

    let scheduling_service = Arc::new(SchedulingService::new(
        transcription_engine,
        meeting_extractor,
        booking_provider,
    ));

    let state = AppState { scheduling_service };
    let router = create_router(state);

    let host: IpAddr = settings
        .server
        .host
        .parse()
        .context("Invalid server host")?;
    let addr = SocketAddr::from((host, settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
