// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Style concept instruction and response parsing

use regex::Regex;
use std::sync::OnceLock;

use super::prompt::Prompt;
use super::types::{GenerationError, StyleConcept};

/// Number of colors in every palette
pub const COLOR_COUNT: usize = 5;

/// Number of image prompts in every concept
pub const IMAGE_PROMPT_COUNT: usize = 3;

/// System instruction constraining the chat model to the style concept JSON shape
pub const STYLE_CONCEPT_INSTRUCTION: &str = r##"You are a professional design consultant that creates comprehensive style concepts for digital applications.

You respond ONLY with valid JSON in this exact format:
{
  "description": "A detailed 2-3 sentence description of the visual style and mood",
  "colors": ["#hexcode1", "#hexcode2", "#hexcode3", "#hexcode4", "#hexcode5"],
  "fontPairing": {
    "heading": "Font Name",
    "body": "Font Name",
    "category": "modern/elegant/playful/bold/minimal"
  },
  "imagePrompts": ["prompt1", "prompt2", "prompt3"]
}

Rules:
- Colors must be 5 harmonious hex codes that work well together
- Use real Google Fonts names only
- Image prompts should be specific, descriptive, and suitable for DALL-E
- Keep image prompts under 100 characters each
- Make everything cohesive with the requested style"##;

fn hex_color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern is valid")
    })
}

/// Whether `value` is a `#RGB` or `#RRGGBB` color
pub fn is_hex_color(value: &str) -> bool {
    hex_color_pattern().is_match(value)
}

/// User message sent alongside the instruction
pub fn concept_request_message(prompt: &Prompt) -> String {
    format!("Create a style concept for: {}", prompt)
}

/// Parse raw chat content into a `StyleConcept`.
///
/// Content must be a bare JSON object of the instructed shape. There is no repair or retry.
pub fn parse_style_concept(content: &str) -> Result<StyleConcept, GenerationError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let concept: StyleConcept = serde_json::from_str(content)
        .map_err(|e| GenerationError::malformed(format!("invalid JSON: {}", e)))?;

    validate_style_concept(&concept)?;
    Ok(concept)
}

/// Check the shape constraints serde cannot express
pub fn validate_style_concept(concept: &StyleConcept) -> Result<(), GenerationError> {
    if concept.colors.len() != COLOR_COUNT {
        return Err(GenerationError::malformed(format!(
            "expected {} colors, got {}",
            COLOR_COUNT,
            concept.colors.len()
        )));
    }

    if let Some(bad) = concept.colors.iter().find(|c| !is_hex_color(c)) {
        return Err(GenerationError::malformed(format!(
            "'{}' is not a hex color",
            bad
        )));
    }

    let fonts = &concept.font_pairing;
    for (field, value) in [
        ("heading", &fonts.heading),
        ("body", &fonts.body),
        ("category", &fonts.category),
    ] {
        if value.trim().is_empty() {
            return Err(GenerationError::malformed(format!(
                "fontPairing.{} must not be empty",
                field
            )));
        }
    }

    if concept.image_prompts.len() != IMAGE_PROMPT_COUNT {
        return Err(GenerationError::malformed(format!(
            "expected {} image prompts, got {}",
            IMAGE_PROMPT_COUNT,
            concept.image_prompts.len()
        )));
    }

    Ok(())
}
