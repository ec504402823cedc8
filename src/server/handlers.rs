//! HTTP handlers for the ask and rebuild endpoints

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    response::Json,
};
use tracing::{info, warn};

use super::error::AdapterError;
use super::types::{extract_question, AskResponse, RebuildResponse};
use super::AppState;

pub async fn health() -> &'static str {
    "ok"
}

/// POST /api/ask
///
/// The body is read raw so that a missing, malformed or non-JSON body is
/// reported as a missing question. A body over the configured limit is
/// answered with a JSON 413.
pub async fn ask(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AskResponse>, AdapterError> {
    let body = body.map_err(|rejection| {
        warn!("Rejected ask body: {}", rejection.body_text());
        AdapterError::rejected(rejection.status(), rejection.body_text())
    })?;
    let question = extract_question(&body).ok_or_else(AdapterError::question_required)?;

    info!("Answering question ({} chars)", question.chars().count());

    let answer = state.pipeline.ask(&question).await.map_err(|e| {
        warn!("Ask failed: {}", e);
        AdapterError::collaborator(e)
    })?;

    Ok(Json(AskResponse { answer }))
}

/// POST /api/rebuild
///
/// Always answers 200; failure is reported in the body's `status` field.
pub async fn rebuild(State(state): State<AppState>) -> Json<RebuildResponse> {
    info!("Rebuilding index via {} pipeline", state.pipeline.name());

    match state.pipeline.build_index().await {
        Ok(()) => {
            info!("Index rebuilt");
            Json(RebuildResponse::ok())
        }
        Err(e) => {
            warn!("Index rebuild failed: {}", e);
            Json(RebuildResponse::error(e.to_string()))
        }
    }
}
