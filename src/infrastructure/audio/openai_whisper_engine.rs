use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioSource, Transcript};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "whisper-1";

pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiWhisperEngine {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(&self, audio: &AudioSource) -> Result<Transcript, TranscriptionError> {
        let audio_data = tokio::fs::read(audio.as_str())
            .await
            .map_err(|e| TranscriptionError::SourceUnreadable(format!("{}: {}", audio, e)))?;

        let url = format!("{}/audio/transcriptions", self.base_url);
        let file_name = audio.file_name().unwrap_or("audio.wav").to_string();

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", multipart::Part::bytes(audio_data).file_name(file_name));

        tracing::debug!(source = %audio, model = %self.model, "Sending audio to Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("body: {}", e)))?;

        let text = text.trim();
        if text.is_empty() {
            return Err(TranscriptionError::EmptyTranscript);
        }

        let transcript = Transcript::new(text);
        tracing::info!(
            chars = transcript.char_count(),
            "Whisper transcription completed"
        );

        Ok(transcript)
    }
}
