//! Axum route handlers for the Generation API.

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio_stream::{wrappers::UnboundedReceiverStream, Stream, StreamExt};
use tracing::{error, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::orchestrator::{run_generation, RunBoard, RunEvent};
use crate::models::platform::{PlatformConfig, PLATFORM_CATALOG};
use crate::models::settings::{GenerationRequest, SettingsOptions};
use crate::presentation::{cards, PlatformCard};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResponse {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub cards: Vec<PlatformCard>,
}

impl RunResponse {
    fn from_board(board: &RunBoard) -> Self {
        Self {
            run_id: board.run_id,
            started_at: board.started_at,
            cards: cards(board),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunSummary {
    run_id: Uuid,
    failed: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/platforms
pub async fn handle_list_platforms() -> Json<Vec<&'static PlatformConfig>> {
    Json(PLATFORM_CATALOG.iter().collect())
}

/// GET /api/v1/settings/options
pub async fn handle_settings_options() -> Json<SettingsOptions> {
    Json(SettingsOptions::current())
}

/// POST /api/v1/generate
///
/// Runs a full generation and answers once every platform has resolved.
/// The run is spawned so a dropped connection does not cancel in-flight calls.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<RunResponse>, AppError> {
    let generator = state.generator.clone();
    let board = tokio::spawn(async move {
        run_generation(generator, &request, |_| {}).await
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Generation task failed: {e}")))??;

    Ok(Json(RunResponse::from_board(&board)))
}

/// POST /api/v1/generate/stream
///
/// Same run, reported as Server-Sent Events:
/// `run` (placeholder cards), one `platform` per resolved platform, then `done`.
/// The run continues to completion even if the client goes away.
pub async fn handle_generate_stream(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    if request.idea.trim().is_empty() {
        return Err(AppError::Validation("idea cannot be empty".to_string()));
    }

    let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<Event>();
    let generator = state.generator.clone();

    tokio::spawn(async move {
        let result = run_generation(generator, &request, |event| {
            let event = match event {
                RunEvent::Started(board) => sse_event("run", &RunResponse::from_board(board)),
                RunEvent::PlatformFinished(content) => {
                    sse_event("platform", &PlatformCard::from_content(content))
                }
            };
            if let Some(event) = event {
                // A closed receiver only means the client disconnected.
                let _ = tx.send(event);
            }
        })
        .await;

        match result {
            Ok(board) => {
                let summary = RunSummary {
                    run_id: board.run_id,
                    failed: board.failed_count(),
                };
                if let Some(event) = sse_event("done", &summary) {
                    let _ = tx.send(event);
                }
            }
            Err(e) => error!("Streaming generation run failed: {e}"),
        }
    });

    let stream = UnboundedReceiverStream::new(rx).map(Ok::<_, Infallible>);
    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

fn sse_event<T: Serialize>(name: &str, payload: &T) -> Option<Event> {
    match Event::default().event(name).json_data(payload) {
        Ok(event) => Some(event),
        Err(e) => {
            warn!("Failed to encode '{name}' event: {e}");
            None
        }
    }
}
