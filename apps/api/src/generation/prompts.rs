// Prompt construction for caption and image generation.
// Pure string building only. All model calls go through llm_client.

use crate::models::platform::Platform;
use crate::models::settings::Tone;

/// Persona prefix shared by every platform. Replace `{tone}` before use.
const PERSONA_TEMPLATE: &str = "You are an expert social media manager. Tone: {tone}.";

const LINKEDIN_RULES: &str = "Write a LinkedIn post. \
    Structure with a hook, insights (bullet points if applicable), and a call to action. \
    Professional but engaging. Use relevant hashtags.";

const TWITTER_RULES: &str = "Write a Twitter/X post. \
    Short, punchy, under 280 characters. \
    Use emojis and 2-3 high-traffic hashtags. No fluff.";

const INSTAGRAM_RULES: &str = "Write an Instagram caption. \
    Engaging, relatable, and visual-focused language. \
    Include a block of 10-15 relevant, high-reach hashtags at the bottom.";

/// Caption request template. Replace `{idea}` before sending.
const CONTENT_PROMPT_TEMPLATE: &str = r#"Draft a post about: "{idea}"."#;

/// Image request template. Replace `{idea}`, `{tone}`, `{platform}` before sending.
const IMAGE_PROMPT_TEMPLATE: &str = r#"A high-quality, photorealistic image representing the concept: "{idea}".
The mood is {tone}. Optimized for social media visual appeal.
Ensure high contrast and vibrant details suitable for {platform}."#;

fn platform_rules(platform: Platform) -> &'static str {
    match platform {
        Platform::LinkedIn => LINKEDIN_RULES,
        Platform::Twitter => TWITTER_RULES,
        Platform::Instagram => INSTAGRAM_RULES,
    }
}

/// System instruction: persona with tone, followed by the platform's formatting rules.
pub fn system_instruction(platform: Platform, tone: Tone) -> String {
    let persona = PERSONA_TEMPLATE.replace("{tone}", tone.name());
    format!("{persona} {}", platform_rules(platform))
}

/// The user-turn prompt that embeds the idea.
pub fn content_prompt(idea: &str) -> String {
    CONTENT_PROMPT_TEMPLATE.replace("{idea}", idea)
}

pub fn image_prompt(platform: Platform, idea: &str, tone: Tone) -> String {
    IMAGE_PROMPT_TEMPLATE
        .replace("{idea}", idea)
        .replace("{tone}", tone.name())
        .replace("{platform}", platform.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_instruction_carries_tone() {
        let instruction = system_instruction(Platform::LinkedIn, Tone::Urgent);
        assert!(instruction.starts_with("You are an expert social media manager. Tone: Urgent."));
    }

    #[test]
    fn test_system_instruction_is_platform_specific() {
        let twitter = system_instruction(Platform::Twitter, Tone::Witty);
        let instagram = system_instruction(Platform::Instagram, Tone::Witty);
        let linkedin = system_instruction(Platform::LinkedIn, Tone::Witty);

        assert!(twitter.contains("under 280 characters"));
        assert!(instagram.contains("10-15 relevant, high-reach hashtags"));
        assert!(linkedin.contains("call to action"));
        assert_ne!(twitter, instagram);
    }

    #[test]
    fn test_content_prompt_quotes_the_idea() {
        assert_eq!(
            content_prompt("Launch of a new AI product"),
            r#"Draft a post about: "Launch of a new AI product"."#
        );
    }

    #[test]
    fn test_image_prompt_embeds_idea_tone_and_platform() {
        let prompt = image_prompt(Platform::Instagram, "Coffee at dawn", Tone::Inspirational);
        assert!(prompt.contains(r#""Coffee at dawn""#));
        assert!(prompt.contains("The mood is Inspirational."));
        assert!(prompt.contains("suitable for Instagram."));
    }

    #[test]
    fn test_prompts_are_deterministic() {
        assert_eq!(
            system_instruction(Platform::Twitter, Tone::Casual),
            system_instruction(Platform::Twitter, Tone::Casual)
        );
        assert_eq!(
            image_prompt(Platform::LinkedIn, "x", Tone::Casual),
            image_prompt(Platform::LinkedIn, "x", Tone::Casual)
        );
    }
}
