// HTTP request handlers
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;

// Simulated authentication latency, mirrors the original login flow
const LOGIN_DELAY: Duration = Duration::from_millis(1500);

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn overview(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.overview_service.overview().await?))
}

pub async fn material_forecast(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.forecast_service.material_forecast().await?))
}

pub async fn vendor_directory(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.vendor_service.directory().await?))
}

pub async fn vendor_profile(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    match state.vendor_service.profile(&id).await? {
        Some(vendor) => Ok(Json(vendor)),
        None => Err(ApiError::NotFound(format!("vendor {id}"))),
    }
}

pub async fn schedule(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.schedule_service.schedule().await?))
}

pub async fn procurement_plan(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.plan_service.plan().await?))
}

pub async fn workflow(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.workflow_service.workflow().await?))
}

pub async fn chat_transcript(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.assistant_service.transcript().await)
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

pub async fn chat_send(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest("message text is empty".to_string()));
    }
    Ok(Json(state.assistant_service.send(text).await))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub name: String,
}

/// Mock login. Accepts any non-empty credentials after a simulated delay;
/// there is no real authentication behind this.
pub async fn login(Json(request): Json<LoginRequest>) -> Result<impl IntoResponse, ApiError> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::BadRequest(
            "email and password are required".to_string(),
        ));
    }

    tokio::time::sleep(LOGIN_DELAY).await;

    let name = request
        .email
        .split('@')
        .next()
        .unwrap_or("user")
        .to_string();
    Ok(Json(LoginResponse {
        token: format!("session-{}", Utc::now().timestamp_millis()),
        name,
    }))
}

/// JSON 404 for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound("route".to_string())
}
