//! HTTP request handlers

use super::assets::serve_static;
use super::types::SendForm;
use super::AppState;
use crate::chat::{self, SendOutcome};
use crate::render::{RenderError, Renderer};
use crate::transcript::Transcript;
use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};

/// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(homepage))
        .route("/send", post(send_message))
        // Static assets (embedded or filesystem in debug builds)
        .route("/assets/*path", get(serve_static))
        .route("/version", get(get_version))
        // The transcript rides in every request and grows without bound
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

// ============================================================
// Page
// ============================================================

async fn homepage(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.renderer.page(&state.seed)?))
}

// ============================================================
// Send
// ============================================================

/// Handle one submitted message.
///
/// Answers 200 with HTML: the replacement input form, plus an out-of-band
/// message list whenever the transcript changed. Gateway and history
/// failures become an inline alert inside the form. Only a rendering
/// failure produces a 500.
async fn send_message(
    State(state): State<AppState>,
    Form(form): Form<SendForm>,
) -> Result<Html<String>, AppError> {
    let outcome = chat::send(state.gateway.as_ref(), &form.history, &form.message).await;
    tracing::debug!(
        turns = outcome.transcript().map_or(0, Transcript::len),
        "Send handled"
    );

    let renderer = state.renderer.as_ref();
    let body = match outcome {
        SendOutcome::Unchanged(transcript) => renderer.chat_input(&transcript, None)?,
        SendOutcome::Replied(transcript) => with_messages(renderer, &transcript, None)?,
        SendOutcome::Failed { transcript, error } => {
            tracing::warn!(
                kind = ?error.kind,
                error = %error,
                turns = transcript.len(),
                "Completion failed; returning transcript without reply"
            );
            with_messages(renderer, &transcript, Some(&error.to_string()))?
        }
        SendOutcome::Malformed(error) => {
            tracing::warn!(
                error = %error,
                history_len = form.history.len(),
                "Discarding unreadable history"
            );
            with_messages(renderer, &state.seed, Some(&error.to_string()))?
        }
    };

    Ok(Html(body))
}

fn with_messages(
    renderer: &Renderer,
    transcript: &Transcript,
    notice: Option<&str>,
) -> Result<String, RenderError> {
    let mut body = renderer.chat_input(transcript, notice)?;
    body.push_str(&renderer.chat_messages(transcript, true)?);
    Ok(body)
}

async fn get_version() -> &'static str {
    concat!("relay-chat ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error handling
// ============================================================

#[derive(Debug)]
enum AppError {
    Internal(String),
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        tracing::error!(error = %e, "Failed to render page");
        AppError::Internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, message).into_response()
    }
}
