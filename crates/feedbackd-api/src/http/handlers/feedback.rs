//! Feedback submission and listing handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use feedbackd_types::feedback::{Feedback, FeedbackDraft};

use crate::http::error::AppError;
use crate::http::extractors::auth::AdminToken;
use crate::state::AppState;

/// Body of a 201 submission response.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
    pub id: i64,
}

/// POST /api/feedback - Accept a public feedback submission.
///
/// Validation failures return 400 with the first violated rule's
/// message and never touch storage.
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(draft): Json<FeedbackDraft>,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    let receipt = state.feedback_service.submit(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: receipt.message,
            id: receipt.id,
        }),
    ))
}

/// GET /api/admin/feedback - All feedback, newest first (admin only).
pub async fn list_feedback(
    State(state): State<AppState>,
    _admin: AdminToken,
) -> Result<Json<Vec<Feedback>>, AppError> {
    let rows = state.feedback_service.list_feedback().await?;
    Ok(Json(rows))
}
