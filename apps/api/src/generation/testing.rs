//! Test double for `ContentGenerator`.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::generation::client::{resolve_aspect_ratio, ContentGenerator, GenerationError};
use crate::models::platform::Platform;
use crate::models::settings::{AspectRatio, ImageSize, Tone};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Text {
        platform: Platform,
        idea: String,
        tone: Tone,
    },
    Image {
        platform: Platform,
        idea: String,
        tone: Tone,
        size: ImageSize,
        forced_aspect_ratio: Option<AspectRatio>,
        resolved_aspect_ratio: AspectRatio,
    },
}

/// Answers `"<Platform> caption"` and a fixed data URI unless told to fail.
/// Failures are returned on the `Err` tier, as a thrown call would be.
#[derive(Default)]
pub struct ScriptedGenerator {
    failing_text: HashSet<Platform>,
    failing_image: HashSet<Platform>,
    panicking_text: HashSet<Platform>,
    no_image: HashSet<Platform>,
    delays: HashMap<Platform, Duration>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedGenerator {
    pub fn fail_text(mut self, platform: Platform) -> Self {
        self.failing_text.insert(platform);
        self
    }

    pub fn fail_image(mut self, platform: Platform) -> Self {
        self.failing_image.insert(platform);
        self
    }

    /// The text call panics instead of returning.
    pub fn panic_text(mut self, platform: Platform) -> Self {
        self.panicking_text.insert(platform);
        self
    }

    /// The image call succeeds without producing an image.
    pub fn without_image(mut self, platform: Platform) -> Self {
        self.no_image.insert(platform);
        self
    }

    /// Both calls for `platform` sleep this long before answering.
    pub fn delay(mut self, platform: Platform, delay: Duration) -> Self {
        self.delays.insert(platform, delay);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn text_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, RecordedCall::Text { .. }))
            .count()
    }

    pub fn image_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, RecordedCall::Image { .. }))
            .count()
    }

    /// Aspect ratio each platform's image call resolved to.
    pub fn resolved_ratios(&self) -> HashMap<Platform, AspectRatio> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                RecordedCall::Image {
                    platform,
                    resolved_aspect_ratio,
                    ..
                } => Some((platform, resolved_aspect_ratio)),
                RecordedCall::Text { .. } => None,
            })
            .collect()
    }

    async fn pause(&self, platform: Platform) {
        if let Some(delay) = self.delays.get(&platform) {
            tokio::time::sleep(*delay).await;
        }
    }
}

pub fn fake_image_uri(platform: Platform) -> String {
    format!("data:image/png;base64,{}", platform.name().to_uppercase())
}

#[async_trait]
impl ContentGenerator for ScriptedGenerator {
    async fn generate_text(
        &self,
        platform: Platform,
        idea: &str,
        tone: Tone,
    ) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(RecordedCall::Text {
            platform,
            idea: idea.to_string(),
            tone,
        });
        self.pause(platform).await;

        if self.panicking_text.contains(&platform) {
            panic!("{platform} text generation blew up");
        }
        if self.failing_text.contains(&platform) {
            return Err(GenerationError::Backstop {
                platform,
                stage: "text",
                message: "connection reset".to_string(),
            });
        }
        Ok(format!("{platform} caption"))
    }

    async fn generate_image(
        &self,
        platform: Platform,
        idea: &str,
        tone: Tone,
        size: ImageSize,
        forced_aspect_ratio: Option<AspectRatio>,
    ) -> Result<Option<String>, GenerationError> {
        self.calls.lock().unwrap().push(RecordedCall::Image {
            platform,
            idea: idea.to_string(),
            tone,
            size,
            forced_aspect_ratio,
            resolved_aspect_ratio: resolve_aspect_ratio(platform, forced_aspect_ratio),
        });
        self.pause(platform).await;

        if self.failing_image.contains(&platform) {
            return Err(GenerationError::Backstop {
                platform,
                stage: "image",
                message: "connection reset".to_string(),
            });
        }
        if self.no_image.contains(&platform) {
            return Ok(None);
        }
        Ok(Some(fake_image_uri(platform)))
    }
}
