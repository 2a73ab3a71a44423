// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Validated user prompt

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Maximum prompt length in characters
pub const MAX_PROMPT_CHARS: usize = 500;

/// Number of characters of a prompt shown in log lines
const LOG_PREVIEW_CHARS: usize = 100;

/// Reasons a raw prompt is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// No prompt, or a prompt that is not a string
    #[error("Prompt is required and must be a string")]
    Missing,

    /// Prompt is blank after trimming
    #[error("Prompt cannot be empty")]
    Empty,

    /// Prompt exceeds `MAX_PROMPT_CHARS`
    #[error("Prompt is too long (max {max} characters)")]
    TooLong {
        /// Length of the rejected prompt in characters
        len: usize,
        /// Configured maximum
        max: usize,
    },
}

/// A trimmed, non-empty prompt of at most `MAX_PROMPT_CHARS` characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Prompt(String);

impl Prompt {
    /// Validate raw user input.
    ///
    /// The length limit applies to the input as received; the stored value is trimmed.
    pub fn parse(raw: &str) -> Result<Self, PromptError> {
        let len = raw.chars().count();
        if len > MAX_PROMPT_CHARS {
            return Err(PromptError::TooLong {
                len,
                max: MAX_PROMPT_CHARS,
            });
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PromptError::Empty);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Shortened form for log output
    pub fn preview(&self) -> String {
        if self.0.chars().count() <= LOG_PREVIEW_CHARS {
            return self.0.clone();
        }
        let head: String = self.0.chars().take(LOG_PREVIEW_CHARS).collect();
        format!("{}...", head)
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
