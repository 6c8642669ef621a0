//! Generation Client: the two capabilities the orchestrator needs per platform.
//!
//! `GenerationClient` converts every provider failure into a sentinel value
//! (a fixed error caption, or "no image"). The `Err` arm of `ContentGenerator`
//! is reserved for failures outside that handling; the orchestrator treats
//! it as a backstop and fails the whole platform.
//!
//! `AppState` holds an `Arc<dyn ContentGenerator>` so tests can substitute a double.

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::generation::prompts::{content_prompt, image_prompt, system_instruction};
use crate::llm_client::{ImageConfig, LlmClient, LlmError};
use crate::models::platform::Platform;
use crate::models::settings::{AspectRatio, ImageSize, Tone};

/// Caption returned when the text call itself failed.
pub const TEXT_ERROR_SENTINEL: &str = "Error generating content. Please try again.";
/// Caption returned when the model answered without any text.
pub const TEXT_EMPTY_SENTINEL: &str = "Failed to generate text.";

/// A failure that escaped the provider-level handling.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{platform} {stage} generation failed: {message}")]
    Backstop {
        platform: Platform,
        stage: &'static str,
        message: String,
    },
}

/// Text and image generation for a single platform.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_text(
        &self,
        platform: Platform,
        idea: &str,
        tone: Tone,
    ) -> Result<String, GenerationError>;

    /// Returns the image as a data URI, or `None` when no image was produced.
    async fn generate_image(
        &self,
        platform: Platform,
        idea: &str,
        tone: Tone,
        size: ImageSize,
        forced_aspect_ratio: Option<AspectRatio>,
    ) -> Result<Option<String>, GenerationError>;
}

/// Forced ratio wins; otherwise the platform default.
pub fn resolve_aspect_ratio(platform: Platform, forced: Option<AspectRatio>) -> AspectRatio {
    forced.unwrap_or_else(|| platform.default_aspect_ratio())
}

/// Gemini-backed generator.
#[derive(Clone)]
pub struct GenerationClient {
    llm: LlmClient,
}

impl GenerationClient {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ContentGenerator for GenerationClient {
    async fn generate_text(
        &self,
        platform: Platform,
        idea: &str,
        tone: Tone,
    ) -> Result<String, GenerationError> {
        let system = system_instruction(platform, tone);
        let prompt = content_prompt(idea);

        match self.llm.generate_text(&system, &prompt).await {
            Ok(text) => Ok(text),
            Err(LlmError::EmptyContent) => {
                warn!("Text generation for {platform} returned no text");
                Ok(TEXT_EMPTY_SENTINEL.to_string())
            }
            Err(e) => {
                warn!("Error generating text for {platform}: {e}");
                Ok(TEXT_ERROR_SENTINEL.to_string())
            }
        }
    }

    async fn generate_image(
        &self,
        platform: Platform,
        idea: &str,
        tone: Tone,
        size: ImageSize,
        forced_aspect_ratio: Option<AspectRatio>,
    ) -> Result<Option<String>, GenerationError> {
        let image_config = ImageConfig {
            aspect_ratio: resolve_aspect_ratio(platform, forced_aspect_ratio),
            image_size: size,
        };
        let prompt = image_prompt(platform, idea, tone);

        match self.llm.generate_image(&prompt, image_config).await {
            Ok(Some(image)) => Ok(Some(image.to_data_uri())),
            Ok(None) => {
                warn!("Image generation for {platform} returned no inline image");
                Ok(None)
            }
            Err(e) => {
                warn!("Error generating image for {platform}: {e}");
                Ok(None)
            }
        }
    }
}
