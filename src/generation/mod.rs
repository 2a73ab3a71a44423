// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Moodboard generation via an OpenAI-compatible provider
//!
//! - Style concept: one chat-completion call returning palette, fonts and image prompts
//! - Images: one image-generation call per image prompt, run concurrently
//! - Partial failure: concept errors are fatal, image errors are dropped

pub mod concept;
pub mod image;
pub mod openai;
pub mod orchestrator;
pub mod prompt;
pub mod provider;
pub mod types;

pub use concept::{parse_style_concept, COLOR_COUNT, IMAGE_PROMPT_COUNT};
pub use openai::OpenAIClient;
pub use orchestrator::{MoodboardError, MoodboardOrchestrator};
pub use prompt::{Prompt, PromptError, MAX_PROMPT_CHARS};
pub use provider::{ConceptGenerator, ImageGenerator};
pub use types::{ErrorKind, FontPairing, GenerationError, StyleConcept};
