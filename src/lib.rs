// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod board;
pub mod cli;
pub mod config;
pub mod generation;
pub mod storage;
pub mod version;

// Re-export main types
pub use board::{MoodboardDraft, VibeBoard};
pub use config::AppConfig;
pub use generation::{
    ErrorKind, FontPairing, GenerationError, MoodboardError, MoodboardOrchestrator, OpenAIClient,
    Prompt, PromptError, StyleConcept,
};
pub use storage::{BoardStore, MemoryBoardStore, StorageError, SupabaseBoardStore};
