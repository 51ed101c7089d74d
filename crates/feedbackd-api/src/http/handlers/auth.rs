//! Admin login handler.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::state::AppState;

/// Login request body. Missing fields default to empty strings, which
/// simply fail the credential check with 401 rather than rejecting the
/// body shape.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Body of a 200 login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub token: String,
}

/// POST /api/admin/login - Authenticate the administrator.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = state.auth.login(&body.username, &body.password)?;
    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful",
        token,
    }))
}
