// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Moodboard generation orchestration
//!
//! One concept call, then a scatter-gather over the image prompts.

use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{error, info, warn};

use super::openai::OpenAIClient;
use super::prompt::{Prompt, PromptError};
use super::provider::{ConceptGenerator, ImageGenerator};
use super::types::{ErrorKind, GenerationError};
use crate::board::MoodboardDraft;

/// Errors returned by the orchestrator
#[derive(Debug, Error)]
pub enum MoodboardError {
    /// Prompt rejected before any provider call
    #[error(transparent)]
    InvalidPrompt(#[from] PromptError),

    /// Style concept generation failed; no board was produced
    #[error("Failed to generate moodboard: {0}")]
    Generation(#[from] GenerationError),
}

impl MoodboardError {
    /// Provider error kind, when the failure came from the provider
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            MoodboardError::InvalidPrompt(_) => None,
            MoodboardError::Generation(e) => Some(e.kind()),
        }
    }
}

/// Sequences concept generation and concurrent image generation
///
/// Holds no per-request state; share one instance behind `Arc`.
pub struct MoodboardOrchestrator {
    concepts: Arc<dyn ConceptGenerator>,
    images: Arc<dyn ImageGenerator>,
}

impl MoodboardOrchestrator {
    pub fn new(concepts: Arc<dyn ConceptGenerator>, images: Arc<dyn ImageGenerator>) -> Self {
        Self { concepts, images }
    }

    /// Use one provider client for both concepts and images
    pub fn with_client(client: Arc<OpenAIClient>) -> Self {
        Self::new(client.clone(), client)
    }

    /// Validate a raw prompt, then generate a moodboard for it
    pub async fn generate_moodboard(&self, raw_prompt: &str) -> Result<MoodboardDraft, MoodboardError> {
        let prompt = Prompt::parse(raw_prompt)?;
        self.generate(&prompt).await
    }

    /// Generate a moodboard for an already validated prompt
    ///
    /// Concept failures are terminal. Image failures only shrink `image_urls`.
    pub async fn generate(&self, prompt: &Prompt) -> Result<MoodboardDraft, MoodboardError> {
        let start = Instant::now();
        info!("Generating style concept for: {}", prompt.preview());

        let concept = self
            .concepts
            .generate_style_concept(prompt)
            .await
            .map_err(|e| {
                error!(kind = ?e.kind(), "Style concept generation failed: {}", e);
                MoodboardError::Generation(e)
            })?;

        info!(
            "Style concept generated: {} colors, fonts {}/{}, {} image prompts",
            concept.colors.len(),
            concept.font_pairing.heading,
            concept.font_pairing.body,
            concept.image_prompts.len()
        );

        let image_urls = self.generate_images(&concept.image_prompts).await;
        if image_urls.is_empty() {
            warn!("No images generated for: {}", prompt.preview());
        }

        info!(
            "Moodboard generated: {}/{} images in {}ms",
            image_urls.len(),
            concept.image_prompts.len(),
            start.elapsed().as_millis()
        );

        Ok(MoodboardDraft::from_concept(prompt, concept, image_urls))
    }

    /// Run every image call concurrently and keep the successful URLs in prompt order
    async fn generate_images(&self, prompts: &[String]) -> Vec<String> {
        let calls = prompts
            .iter()
            .map(|prompt| self.images.generate_image(prompt));

        join_all(calls)
            .await
            .into_iter()
            .flatten()
            .filter(|url| !url.trim().is_empty())
            .collect()
    }
}
