// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image prompt styling

/// Suffix appended to every image prompt
pub const IMAGE_STYLE_SUFFIX: &str =
    " --style modern, clean, high quality, professional design inspiration";

/// Allowed output sizes for image generation
pub const ALLOWED_SIZES: &[&str] = &["256x256", "512x512", "1024x1024", "1792x1024", "1024x1792"];

/// Allowed quality settings
pub const ALLOWED_QUALITIES: &[&str] = &["standard", "hd"];

/// Prompt text actually sent to the image endpoint
pub fn styled_image_prompt(prompt: &str) -> String {
    format!("{}{}", prompt.trim(), IMAGE_STYLE_SUFFIX)
}

/// Treat missing or blank URLs as "no image"
pub fn usable_url(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.trim().is_empty())
}
