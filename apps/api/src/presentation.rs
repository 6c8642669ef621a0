//! Card view models consumed by the page.
//!
//! The page renders one card per platform. Everything it needs beyond the raw
//! `GeneratedContent` (header metadata, status, character budget, download
//! filename) is computed here so the script stays a thin renderer.

use serde::Serialize;

use crate::generation::orchestrator::RunBoard;
use crate::models::content::GeneratedContent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    Loading,
    Ready,
    Error,
}

impl CardStatus {
    pub fn of(content: &GeneratedContent) -> Self {
        if content.is_failed() {
            CardStatus::Error
        } else if content.is_loading {
            CardStatus::Loading
        } else {
            CardStatus::Ready
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformCard {
    #[serde(flatten)]
    pub content: GeneratedContent,
    pub status: CardStatus,
    pub label: &'static str,
    pub description: &'static str,
    pub accent_color: &'static str,
    pub char_count: usize,
    pub char_limit: usize,
    pub over_limit: bool,
    pub download_filename: String,
}

impl PlatformCard {
    pub fn from_content(content: &GeneratedContent) -> Self {
        let config = content.platform.config();
        let char_count = content.text.chars().count();
        let char_limit = content.platform.char_limit();

        Self {
            status: CardStatus::of(content),
            label: config.label,
            description: config.description,
            accent_color: config.accent_color,
            char_count,
            char_limit,
            over_limit: char_count > char_limit,
            download_filename: content.platform.download_filename(),
            content: content.clone(),
        }
    }
}

/// Cards for every platform on the board, in display order.
pub fn cards(board: &RunBoard) -> Vec<PlatformCard> {
    board
        .entries()
        .iter()
        .map(PlatformCard::from_content)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::platform::Platform;

    #[test]
    fn test_status_follows_content_state() {
        assert_eq!(
            CardStatus::of(&GeneratedContent::loading(Platform::Twitter)),
            CardStatus::Loading
        );
        assert_eq!(
            CardStatus::of(&GeneratedContent::ready(Platform::Twitter, "hi".into(), None)),
            CardStatus::Ready
        );
        assert_eq!(
            CardStatus::of(&GeneratedContent::failed(Platform::Twitter)),
            CardStatus::Error
        );
    }

    #[test]
    fn test_over_limit_counts_characters_not_bytes() {
        // 280 multi-byte characters sit exactly at the Twitter limit.
        let text = "é".repeat(280);
        let card = PlatformCard::from_content(&GeneratedContent::ready(
            Platform::Twitter,
            text,
            None,
        ));
        assert_eq!(card.char_count, 280);
        assert!(!card.over_limit);

        let card = PlatformCard::from_content(&GeneratedContent::ready(
            Platform::Twitter,
            "x".repeat(281),
            None,
        ));
        assert!(card.over_limit);
    }

    #[test]
    fn test_card_json_flattens_content() {
        let card = PlatformCard::from_content(&GeneratedContent::ready(
            Platform::Instagram,
            "Sunrise vibes".into(),
            Some("data:image/png;base64,AAAA".into()),
        ));
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["platform"], "Instagram");
        assert_eq!(json["text"], "Sunrise vibes");
        assert_eq!(json["imageUrl"], "data:image/png;base64,AAAA");
        assert_eq!(json["isLoading"], false);
        assert_eq!(json["status"], "ready");
        assert_eq!(json["charLimit"], 2200);
        assert_eq!(json["downloadFilename"], "instagram_post.png");
    }

    #[test]
    fn test_cards_cover_the_whole_board_in_order() {
        let board = RunBoard::new();
        let platforms: Vec<Platform> = cards(&board).iter().map(|c| c.content.platform).collect();
        assert_eq!(platforms, Platform::ALL.to_vec());
    }
}
