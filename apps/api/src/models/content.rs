use serde::{Deserialize, Serialize};

use crate::models::platform::Platform;

/// Message shown on a platform card when its generation attempt failed outright.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate content";

/// The generated post for one platform within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub platform: Platform,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GeneratedContent {
    /// Placeholder shown while the platform's generation is in flight.
    pub fn loading(platform: Platform) -> Self {
        Self {
            platform,
            text: String::new(),
            image_url: None,
            is_loading: true,
            error: None,
        }
    }

    pub fn ready(platform: Platform, text: String, image_url: Option<String>) -> Self {
        Self {
            platform,
            text,
            image_url,
            is_loading: false,
            error: None,
        }
    }

    /// Terminal failure. Any text or image produced before the failure is dropped.
    pub fn failed(platform: Platform) -> Self {
        Self {
            platform,
            text: String::new(),
            image_url: None,
            is_loading: false,
            error: Some(GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}
