//! HTTP request handlers

use super::assets::{get_index_html, serve_static};
use super::types::{
    ConfigResponse, ErrorResponse, SessionListResponse, UssdRequest, UssdResponse,
};
use super::AppState;
use crate::menu::Submission;
use crate::session::{SessionStore, StoreError};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Browser keypad emulator
        .route("/", get(serve_emulator))
        .route("/assets/*path", get(serve_static))
        // Gateway callback
        .route("/api/ussd", post(handle_ussd))
        // Inspection
        .route("/api/sessions", get(list_sessions))
        .route("/api/config", get(get_config))
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Emulator Page
// ============================================================

async fn serve_emulator() -> impl IntoResponse {
    match get_index_html() {
        Some(content) => Html(content).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Html("<h1>404 - emulator page not found in ui/dist</h1>".to_string()),
        )
            .into_response(),
    }
}

// ============================================================
// Gateway Callback
// ============================================================

async fn handle_ussd(
    State(state): State<AppState>,
    payload: Result<Json<UssdRequest>, JsonRejection>,
) -> Result<Json<UssdResponse>, AppError> {
    let Json(req) = payload?;

    let result = state
        .dispatcher
        .dispatch(
            &req.session_id,
            &Submission::new(&req.service_code, &req.text),
        )
        .await?;

    tracing::info!(
        session_id = %req.session_id,
        phone_number = %req.phone_number,
        service_code = %req.service_code,
        text = %req.text,
        status = %result.status,
        "USSD request handled"
    );

    Ok(Json(UssdResponse {
        status: result.status,
        message: result.message.to_string(),
    }))
}

// ============================================================
// Inspection
// ============================================================

async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<SessionListResponse>, AppError> {
    let sessions = state.dispatcher.store().list().await?;
    Ok(Json(SessionListResponse { sessions }))
}

async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        entry_code: state.dispatcher.context().entry_code.clone(),
    })
}

async fn get_version() -> &'static str {
    concat!("ussd-sim ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
