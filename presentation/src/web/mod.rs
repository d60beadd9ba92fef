//! HTTP front end
//!
//! `GET /` serves a single-page form; `POST /ask` takes
//! `{question, api_key?}` and answers with the original question, its
//! normalized form, the tokens and the model's answer.

mod dto;

pub use dto::{AskRequest, AskResponse, ErrorResponse};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Html,
    routing::{get, post},
};
use qa_application::{RunAskInput, RunAskUseCase};
use qa_domain::util::preview;
use std::sync::Arc;
use tracing::{info, warn};

const INDEX_HTML: &str = include_str!("templates/index.html");

/// Application state shared across handlers
pub struct AppState {
    pub ask: RunAskUseCase,
}

impl AppState {
    pub fn new(ask: RunAskUseCase) -> Self {
        Self { ask }
    }
}

type AppStateArc = Arc<AppState>;
type ApiError = (StatusCode, Json<ErrorResponse>);

/// Build the router for the HTTP front end
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ask", post(ask))
        .with_state(Arc::new(state))
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(state: AppState, addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

fn bad_request(message: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

async fn ask(
    State(state): State<AppStateArc>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected /ask body: {}", rejection.body_text());
        bad_request(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    info!("POST /ask: {}", preview(request.question.trim(), 80));

    let mut input = RunAskInput::new(request.question);
    if let Some(key) = request.api_key {
        input = input.with_credential(key);
    }

    let outcome = state
        .ask
        .execute(input)
        .await
        .map_err(|e| bad_request(e.to_string()))?;

    Ok(Json(AskResponse::from(&outcome)))
}
