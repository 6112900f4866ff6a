use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    AuthenticationError, BookingError, BookingProvider, MeetingBooker,
};
use crate::domain::MeetingRecord;

const DEFAULT_AUTH_BASE_URL: &str = "https://zoom.us";
const DEFAULT_API_BASE_URL: &str = "https://api.zoom.us/v2";
/// Meetings are booked under a fixed topic; callers never name them.
const MEETING_TOPIC: &str = "Zoom meeting for something";
/// Zoom's type code for a scheduled (non-instant) meeting.
const SCHEDULED_MEETING_TYPE: u8 = 2;

/// Server-to-server OAuth credentials for one Zoom account.
#[derive(Clone)]
pub struct ZoomCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub account_id: String,
}

impl fmt::Debug for ZoomCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("account_id", &self.account_id)
            .finish()
    }
}

/// Unauthenticated Zoom client. Holds credentials and can only perform the
/// token handshake; booking requires the [`ZoomBookingSession`] it mints.
pub struct ZoomBookingProvider {
    client: reqwest::Client,
    credentials: ZoomCredentials,
    auth_base_url: String,
    api_base_url: String,
}

/// Authenticated Zoom session. Owns the access token for its lifetime; the
/// token is never stored anywhere else and dies with the session.
pub struct ZoomBookingSession {
    client: reqwest::Client,
    api_base_url: String,
    access_token: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Serialize)]
struct CreateMeetingRequest {
    topic: String,
    #[serde(rename = "type")]
    meeting_type: u8,
    start_time: String,
    duration: u32,
}

impl ZoomBookingProvider {
    pub fn new(
        credentials: ZoomCredentials,
        auth_base_url: Option<String>,
        api_base_url: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            auth_base_url: auth_base_url.unwrap_or_else(|| DEFAULT_AUTH_BASE_URL.to_string()),
            api_base_url: api_base_url.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        }
    }
}

#[async_trait]
impl BookingProvider for ZoomBookingProvider {
    async fn authenticate(&self) -> Result<Box<dyn MeetingBooker>, AuthenticationError> {
        tracing::debug!(account_id = %self.credentials.account_id, "Requesting Zoom access token");

        let response = self
            .client
            .post(format!("{}/oauth/token", self.auth_base_url))
            .query(&[
                ("grant_type", "account_credentials"),
                ("account_id", self.credentials.account_id.as_str()),
            ])
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .header(reqwest::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .send()
            .await
            .map_err(|e| AuthenticationError::ApiRequestFailed(e.to_string()))?;

        if response.status() != reqwest::StatusCode::OK {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, "Zoom token request denied");
            return Err(AuthenticationError::Denied { status, body });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthenticationError::InvalidResponse(e.to_string()))?;

        tracing::info!("Zoom access token acquired");

        Ok(Box::new(ZoomBookingSession {
            client: self.client.clone(),
            api_base_url: self.api_base_url.clone(),
            access_token: token.access_token,
        }))
    }
}

#[async_trait]
impl MeetingBooker for ZoomBookingSession {
    async fn book(
        &self,
        start_time: &str,
        duration_minutes: u32,
    ) -> Result<MeetingRecord, BookingError> {
        let request_body = CreateMeetingRequest {
            topic: MEETING_TOPIC.to_string(),
            meeting_type: SCHEDULED_MEETING_TYPE,
            start_time: start_time.to_string(),
            duration: duration_minutes,
        };

        tracing::debug!(start_time, duration_minutes, "Creating Zoom meeting");

        let response = self
            .client
            .post(format!("{}/users/me/meetings", self.api_base_url))
            .bearer_auth(&self.access_token)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| BookingError::ApiRequestFailed(e.to_string()))?;

        if response.status() != reqwest::StatusCode::CREATED {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, "Zoom meeting creation rejected");
            return Err(BookingError::Rejected { status, body });
        }

        let record: MeetingRecord = response
            .json()
            .await
            .map_err(|e| BookingError::InvalidResponse(e.to_string()))?;

        tracing::info!(meeting_id = ?record.id(), "Zoom meeting created");

        Ok(record)
    }
}
