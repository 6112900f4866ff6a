use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{BookingProvider, MeetingExtractor, TranscriptionEngine};
use crate::domain::{AudioSource, MeetingRecord};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ScheduleMeetingRequest {
    pub file_path: String,
}

#[derive(Serialize)]
pub struct ScheduleMeetingResponse {
    pub status: String,
    pub meeting: MeetingRecord,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Serialize)]
pub struct ApiError {
    pub message: String,
    pub r#type: String,
}

#[tracing::instrument(skip(state, request), fields(file_path = %request.file_path))]
pub async fn schedule_meeting_handler<T, X, B>(
    State(state): State<AppState<T, X, B>>,
    Json(request): Json<ScheduleMeetingRequest>,
) -> impl IntoResponse
where
    T: TranscriptionEngine + 'static,
    X: MeetingExtractor + 'static,
    B: BookingProvider + 'static,
{
    let audio = AudioSource::from_path(request.file_path);

    match state.scheduling_service.schedule(&audio).await {
        Ok(meeting) => {
            tracing::info!(meeting_id = ?meeting.id(), "Meeting scheduled");
            (
                StatusCode::OK,
                Json(ScheduleMeetingResponse {
                    status: "Success".to_string(),
                    meeting,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, stage = e.kind(), "Meeting scheduling failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: ApiError {
                        message: e.to_string(),
                        r#type: e.kind().to_string(),
                    },
                }),
            )
                .into_response()
        }
    }
}
