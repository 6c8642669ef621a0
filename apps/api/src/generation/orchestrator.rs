//! Generation run orchestration.
//!
//! Flow: validate idea → board of loading placeholders → one task per platform,
//!       text + image joined → board entry replaced as each platform resolves.
//!
//! Each platform runs in its own spawned task, so a panic while generating one
//! platform surfaces as a `JoinError` and fails only that platform. The board
//! is only touched from the calling task and needs no locks.
//! Text and image for one platform are both awaited before the entry is
//! finalized; a failure in either fails the platform.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::task::JoinError;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::client::{ContentGenerator, GenerationError};
use crate::models::content::GeneratedContent;
use crate::models::platform::Platform;
use crate::models::settings::{GenerationRequest, GenerationSettings};

// ────────────────────────────────────────────────────────────────────────────
// Run board
// ────────────────────────────────────────────────────────────────────────────

/// The results of one generation run: exactly one entry per platform,
/// stored in `Platform::ALL` order.
#[derive(Debug, Clone)]
pub struct RunBoard {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    entries: [GeneratedContent; Platform::COUNT],
}

impl RunBoard {
    /// A fresh board with every platform loading.
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            entries: Platform::ALL.map(GeneratedContent::loading),
        }
    }

    pub fn get(&self, platform: Platform) -> &GeneratedContent {
        &self.entries[platform.index()]
    }

    /// Replaces the entry for `content.platform`.
    pub fn replace(&mut self, content: GeneratedContent) {
        let slot = content.platform.index();
        self.entries[slot] = content;
    }

    pub fn entries(&self) -> &[GeneratedContent] {
        &self.entries
    }

    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|e| !e.is_loading)
    }

    pub fn failed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_failed()).count()
    }
}

impl Default for RunBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress notifications emitted while a run is in flight.
#[derive(Debug)]
pub enum RunEvent<'a> {
    /// The board was initialized with loading placeholders.
    Started(&'a RunBoard),
    /// One platform resolved; the entry is final for this run.
    PlatformFinished(&'a GeneratedContent),
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestration
// ────────────────────────────────────────────────────────────────────────────

/// Runs text and image generation for every platform and returns the final board.
///
/// An empty or whitespace-only idea is rejected before any generator call.
/// `on_event` is called once with the placeholder board, then once per
/// platform in completion order.
pub async fn run_generation<F>(
    generator: Arc<dyn ContentGenerator>,
    request: &GenerationRequest,
    mut on_event: F,
) -> Result<RunBoard, AppError>
where
    F: FnMut(RunEvent<'_>),
{
    if request.idea.trim().is_empty() {
        return Err(AppError::Validation("idea cannot be empty".to_string()));
    }

    let settings = request.settings;
    let mut board = RunBoard::new();
    info!(
        "Generation run {} started: tone={}, image_size={}, aspect_ratio={}",
        board.run_id,
        settings.tone,
        settings.image_size.as_str(),
        settings
            .forced_aspect_ratio
            .map(|r| r.as_str())
            .unwrap_or("auto")
    );
    on_event(RunEvent::Started(&board));

    let mut pending: FuturesUnordered<_> = Platform::ALL
        .into_iter()
        .map(|platform| {
            let task = tokio::spawn(generate_for_platform(
                generator.clone(),
                platform,
                request.idea.clone(),
                settings,
            ));
            async move { (platform, task.await) }
        })
        .collect();

    while let Some((platform, joined)) = pending.next().await {
        let content = joined.unwrap_or_else(|e| platform_task_failed(platform, e));
        board.replace(content);
        on_event(RunEvent::PlatformFinished(board.get(platform)));
    }
    debug_assert!(board.is_complete());

    info!(
        "Generation run {} finished: {} of {} platforms failed",
        board.run_id,
        board.failed_count(),
        Platform::COUNT
    );

    Ok(board)
}

/// Issues text and image generation together and finalizes the platform's entry.
/// Neither call is cancelled when the other fails.
async fn generate_for_platform(
    generator: Arc<dyn ContentGenerator>,
    platform: Platform,
    idea: String,
    settings: GenerationSettings,
) -> GeneratedContent {
    let (text, image_url) = tokio::join!(
        generator.generate_text(platform, &idea, settings.tone),
        generator.generate_image(
            platform,
            &idea,
            settings.tone,
            settings.image_size,
            settings.forced_aspect_ratio,
        ),
    );

    match (text, image_url) {
        (Ok(text), Ok(image_url)) => GeneratedContent::ready(platform, text, image_url),
        (Err(e), _) | (_, Err(e)) => {
            error!("Generation failed for {platform}: {e}");
            GeneratedContent::failed(platform)
        }
    }
}

/// The platform's task panicked or was cancelled.
fn platform_task_failed(platform: Platform, e: JoinError) -> GeneratedContent {
    let e = GenerationError::Backstop {
        platform,
        stage: "task",
        message: e.to_string(),
    };
    error!("Generation failed for {platform}: {e}");
    GeneratedContent::failed(platform)
}
