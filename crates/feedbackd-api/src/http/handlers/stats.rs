//! Aggregate statistics handler.

use axum::extract::State;
use axum::Json;

use feedbackd_types::feedback::FeedbackStats;

use crate::http::error::AppError;
use crate::http::extractors::auth::AdminToken;
use crate::state::AppState;

/// GET /api/admin/stats - Aggregate feedback statistics (admin only).
///
/// `{total, avgRating, positive, negative}`: average rounded to two
/// decimals (0 when empty), positive = rating >= 4, negative =
/// rating < 3, with 3 as the neutral band.
pub async fn get_stats(
    State(state): State<AppState>,
    _admin: AdminToken,
) -> Result<Json<FeedbackStats>, AppError> {
    let stats = state.feedback_service.stats().await?;
    Ok(Json(stats))
}
