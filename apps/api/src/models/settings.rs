use serde::{Deserialize, Serialize};

/// Stylistic register applied to both the caption and the image mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Witty,
    Urgent,
    Inspirational,
    Casual,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Witty,
        Tone::Urgent,
        Tone::Inspirational,
        Tone::Casual,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Witty => "Witty",
            Tone::Urgent => "Urgent",
            Tone::Inspirational => "Inspirational",
            Tone::Casual => "Casual",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Requested image resolution, passed through to the image model as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl ImageSize {
    pub const ALL: [ImageSize; 3] = [ImageSize::OneK, ImageSize::TwoK, ImageSize::FourK];

    pub const fn as_str(self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
            ImageSize::FourK => "4K",
        }
    }
}

/// Width:height constraint for image generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "2:3")]
    Portrait2x3,
    #[serde(rename = "3:2")]
    Landscape3x2,
    #[serde(rename = "3:4")]
    Portrait3x4,
    #[serde(rename = "4:3")]
    Landscape4x3,
    #[serde(rename = "9:16")]
    Portrait9x16,
    #[serde(rename = "16:9")]
    Landscape16x9,
    #[serde(rename = "21:9")]
    Ultrawide21x9,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 8] = [
        AspectRatio::Square,
        AspectRatio::Portrait2x3,
        AspectRatio::Landscape3x2,
        AspectRatio::Portrait3x4,
        AspectRatio::Landscape4x3,
        AspectRatio::Portrait9x16,
        AspectRatio::Landscape16x9,
        AspectRatio::Ultrawide21x9,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait2x3 => "2:3",
            AspectRatio::Landscape3x2 => "3:2",
            AspectRatio::Portrait3x4 => "3:4",
            AspectRatio::Landscape4x3 => "4:3",
            AspectRatio::Portrait9x16 => "9:16",
            AspectRatio::Landscape16x9 => "16:9",
            AspectRatio::Ultrawide21x9 => "21:9",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings snapshot for a single generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub image_size: ImageSize,
    /// `None` means each platform uses its own default ratio.
    #[serde(default)]
    pub forced_aspect_ratio: Option<AspectRatio>,
}

/// Request body for a generation run.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub idea: String,
    #[serde(default)]
    pub settings: GenerationSettings,
}

/// The choices offered by the settings strip, with their defaults.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsOptions {
    pub tones: Vec<Tone>,
    pub image_sizes: Vec<ImageSize>,
    /// Does not include "auto"; the page renders that as an explicit `null` choice.
    pub aspect_ratios: Vec<AspectRatio>,
    pub defaults: GenerationSettings,
}

impl SettingsOptions {
    pub fn current() -> Self {
        Self {
            tones: Tone::ALL.to_vec(),
            image_sizes: ImageSize::ALL.to_vec(),
            aspect_ratios: AspectRatio::ALL.to_vec(),
            defaults: GenerationSettings::default(),
        }
    }
}
