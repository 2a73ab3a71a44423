// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Generation provider traits
//!
//! The orchestrator only sees these two seams. `OpenAIClient` implements both;
//! tests substitute doubles.

use async_trait::async_trait;

use super::prompt::Prompt;
use super::types::{GenerationError, StyleConcept};

/// Produces a style concept from a prompt
///
/// Failures are returned to the caller; a concept is all-or-nothing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConceptGenerator: Send + Sync {
    /// Issue one chat-completion call and parse the result
    async fn generate_style_concept(&self, prompt: &Prompt)
        -> Result<StyleConcept, GenerationError>;
}

/// Produces a single image for a short prompt
///
/// Implementations never fail: any error is logged and reported as `None`,
/// so one bad image cannot abort a moodboard.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image and return its URL
    async fn generate_image(&self, prompt: &str) -> Option<String>;
}
