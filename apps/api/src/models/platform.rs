//! Platform catalog: the static per-platform configuration.
//!
//! The catalog is fixed at compile time. Declaration order of `Platform::ALL`
//! is the display order used by the board and the cards.

use serde::{Deserialize, Serialize};

use crate::models::settings::AspectRatio;

/// A supported publishing destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    LinkedIn,
    Twitter,
    Instagram,
}

impl Platform {
    pub const COUNT: usize = 3;

    /// Every platform, in display order.
    pub const ALL: [Platform; Platform::COUNT] = [Platform::LinkedIn, Platform::Twitter, Platform::Instagram];

    /// Position of this platform in `Platform::ALL`. Used to index fixed-size tables.
    pub const fn index(self) -> usize {
        match self {
            Platform::LinkedIn => 0,
            Platform::Twitter => 1,
            Platform::Instagram => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter",
            Platform::Instagram => "Instagram",
        }
    }

    /// Static configuration for this platform.
    pub fn config(self) -> &'static PlatformConfig {
        &PLATFORM_CATALOG[self.index()]
    }

    pub fn default_aspect_ratio(self) -> AspectRatio {
        self.config().default_aspect_ratio
    }

    pub fn char_limit(self) -> usize {
        self.config().char_limit
    }

    /// Filename offered when the page saves this platform's image.
    pub fn download_filename(self) -> String {
        format!("{}_post.png", self.name().to_lowercase())
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Display metadata and generation defaults for one platform.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfig {
    pub platform: Platform,
    /// Label shown on the card header ("Twitter" is presented as X).
    pub label: &'static str,
    pub description: &'static str,
    /// CSS accent colour for the card border and icon.
    pub accent_color: &'static str,
    pub default_aspect_ratio: AspectRatio,
    pub char_limit: usize,
}

/// Indexed by `Platform::index()`.
pub static PLATFORM_CATALOG: [PlatformConfig; Platform::COUNT] = [
    PlatformConfig {
        platform: Platform::LinkedIn,
        label: "LinkedIn",
        description: "Long-form, professional insights",
        accent_color: "#3b82f6",
        default_aspect_ratio: AspectRatio::Landscape16x9,
        char_limit: 3000,
    },
    PlatformConfig {
        platform: Platform::Twitter,
        label: "Twitter / X",
        description: "Short, punchy, trending tags",
        accent_color: "#38bdf8",
        default_aspect_ratio: AspectRatio::Landscape16x9,
        char_limit: 280,
    },
    PlatformConfig {
        platform: Platform::Instagram,
        label: "Instagram",
        description: "Visual-focused, hashtag heavy",
        accent_color: "#ec4899",
        default_aspect_ratio: AspectRatio::Portrait3x4,
        char_limit: 2200,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_indexed_by_platform() {
        for platform in Platform::ALL {
            assert_eq!(platform.config().platform, platform);
        }
    }

    #[test]
    fn test_default_aspect_ratios() {
        assert_eq!(Platform::LinkedIn.default_aspect_ratio(), AspectRatio::Landscape16x9);
        assert_eq!(Platform::Twitter.default_aspect_ratio(), AspectRatio::Landscape16x9);
        assert_eq!(Platform::Instagram.default_aspect_ratio(), AspectRatio::Portrait3x4);
    }

    #[test]
    fn test_twitter_char_limit_is_280() {
        assert_eq!(Platform::Twitter.char_limit(), 280);
    }

    #[test]
    fn test_download_filename_is_lowercased() {
        assert_eq!(Platform::LinkedIn.download_filename(), "linkedin_post.png");
        assert_eq!(Platform::Instagram.download_filename(), "instagram_post.png");
    }

    #[test]
    fn test_platform_serializes_by_name() {
        let json = serde_json::to_string(&Platform::Twitter).unwrap();
        assert_eq!(json, "\"Twitter\"");
        let parsed: Platform = serde_json::from_str("\"Instagram\"").unwrap();
        assert_eq!(parsed, Platform::Instagram);
    }
}
