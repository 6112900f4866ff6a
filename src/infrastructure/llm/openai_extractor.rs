use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ExtractionError, MeetingExtractor};
use crate::domain::{MeetingDetails, Transcript};
use crate::infrastructure::observability::sanitize_prompt;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";
/// Enough for the two-field object the schema permits, nothing more.
const MAX_COMPLETION_TOKENS: u32 = 50;

pub struct OpenAiMeetingExtractor {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
    json_schema: JsonSchemaFormat,
}

#[derive(Serialize)]
struct JsonSchemaFormat {
    name: String,
    schema: serde_json::Value,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiMeetingExtractor {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    fn build_prompt(transcript: &Transcript) -> String {
        format!(
            r#"Extract the meeting details in JSON format from the following input text:

Input: "{}"

The JSON output should have two fields:
- "duration_minutes": the duration of the meeting in minutes
- "start_timestamp": the timestamp of when the meeting starts in ISO 8601 format

Example output:
{{
    "duration_minutes": 30,
    "start_timestamp": "2024-12-26T12:00:00+05:30"
}}"#,
            transcript.as_str()
        )
    }

    /// Strict two-field schema; `additionalProperties: false` keeps the
    /// model from inventing extra fields.
    fn meeting_schema() -> ResponseFormat {
        ResponseFormat {
            format_type: "json_schema".to_string(),
            json_schema: JsonSchemaFormat {
                name: "meeting_schema".to_string(),
                schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "duration_minutes": {
                            "description": "Duration in minutes",
                            "type": "integer"
                        },
                        "start_timestamp": {
                            "description": "Start timestamp in ISO 8601",
                            "type": "string"
                        }
                    },
                    "additionalProperties": false
                }),
            },
        }
    }
}

#[async_trait]
impl MeetingExtractor for OpenAiMeetingExtractor {
    async fn extract(&self, transcript: &Transcript) -> Result<MeetingDetails, ExtractionError> {
        let prompt = Self::build_prompt(transcript);

        tracing::debug!(
            model = %self.model,
            prompt = %sanitize_prompt(&prompt),
            "Requesting meeting detail extraction"
        );

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: 0.0,
            response_format: Self::meeting_schema(),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ExtractionError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ExtractionError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ExtractionError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ExtractionError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ExtractionError::InvalidResponse("empty choices".to_string()))?;

        let details: MeetingDetails = serde_json::from_str(&content)
            .map_err(|e| ExtractionError::InvalidResponse(format!("meeting details: {}", e)))?;

        tracing::info!(
            duration_minutes = details.duration_minutes,
            start_timestamp = %details.start_timestamp,
            "Meeting details extracted"
        );

        Ok(details)
    }
}
