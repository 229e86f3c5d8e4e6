use super::types::{AnalyzeRequest, AskForm, ErrorResponse};
use crate::{
    Error,
    analysis::{Assistant, Outcome},
    render::Pages,
};
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(assistant: Assistant, pages: Pages) -> Self {
        Self {
            assistant: Arc::new(assistant),
            pages: Arc::new(pages),
        }
    }
}

pub async fn index(State(state): State<AppState>) -> Response {
    html_response(StatusCode::OK, state.pages.index(None, None))
}

pub async fn ask(State(state): State<AppState>, Form(form): Form<AskForm>) -> Response {
    let span = info_span!("submission", request_id = %Uuid::new_v4());

    async move {
        match state.assistant.ask(&form.query).await {
            Ok(outcome) => html_response(
                StatusCode::OK,
                state.pages.index(Some(&form.query), Some(&outcome)),
            ),
            Err(e) => {
                log_failure(&e);
                html_response(
                    status_for(&e),
                    state.pages.unreachable(&form.query, &e.to_string()),
                )
            }
        }
    }
    .instrument(span)
    .await
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Outcome>, (StatusCode, Json<ErrorResponse>)> {
    let span = info_span!("analyze", request_id = %Uuid::new_v4());

    async move {
        info!("Received analysis request");

        state.assistant.ask(&request.input).await.map(Json).map_err(|e| {
            log_failure(&e);
            (
                status_for(&e),
                Json(ErrorResponse {
                    error: format!("Analysis error: {}", e),
                }),
            )
        })
    }
    .instrument(span)
    .await
}

pub async fn health() -> &'static str {
    "ok"
}

fn html_response(status: StatusCode, page: crate::Result<String>) -> Response {
    match page {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

fn status_for(e: &Error) -> StatusCode {
    if e.is_upstream() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn log_failure(e: &Error) {
    if e.is_upstream() {
        warn!("CLU service call failed: {}", e);
    } else {
        error!("Failed to process submission: {}", e);
    }
}
