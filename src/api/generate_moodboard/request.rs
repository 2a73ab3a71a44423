// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Moodboard generation request types and validation

use serde::{Deserialize, Serialize};

use crate::generation::{Prompt, PromptError};

/// Request for moodboard generation via POST /api/generate-moodboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMoodboardRequest {
    /// Project or app idea to style, at most 500 characters
    #[serde(default)]
    pub prompt: Option<String>,
}

impl GenerateMoodboardRequest {
    /// Validate the request and return the trimmed prompt
    pub fn validate(&self) -> Result<Prompt, PromptError> {
        let raw = self.prompt.as_deref().ok_or(PromptError::Missing)?;
        Prompt::parse(raw)
    }
}
