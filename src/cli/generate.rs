// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Context, Result};
use clap::Args;
use std::sync::Arc;
use tracing::info;

use crate::board::VibeBoard;
use crate::config::AppConfig;
use crate::generation::{MoodboardOrchestrator, OpenAIClient};
use crate::storage::{BoardStore, SupabaseBoardStore};

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Description of the brand or project (max 500 characters)
    pub prompt: String,

    /// Persist the board to Supabase after generating it
    #[arg(long)]
    pub save: bool,
}

/// Generate one moodboard and print it
pub async fn generate(args: GenerateArgs) -> Result<()> {
    dotenv::dotenv().ok();
    let config = AppConfig::from_env();
    config.validate().map_err(|e| anyhow!(e))?;

    // Fail before calling OpenAI if --save cannot succeed
    let store = if args.save {
        let store = SupabaseBoardStore::new(&config.supabase)
            .context("--save requires SUPABASE_URL and SUPABASE_ANON_KEY")?;
        Some(store)
    } else {
        None
    };

    let client = OpenAIClient::new(&config.openai)?;
    let orchestrator = MoodboardOrchestrator::with_client(Arc::new(client));

    println!("🎨 Generating moodboard...");
    let draft = orchestrator.generate_moodboard(&args.prompt).await?;
    info!(
        "Generated {} colors and {} images",
        draft.colors.len(),
        draft.image_urls.len()
    );

    let mut board = VibeBoard::from_draft(draft.clone());

    if let Some(store) = store {
        let saved = store
            .insert_board(&draft)
            .await
            .context("failed to save board")?;
        println!("💾 Saved board {}", saved.id);
        board.id = saved.id;
        board.created_at = saved.created_at;
        board.updated_at = saved.updated_at;
    }

    println!("{}", serde_json::to_string_pretty(&board)?);
    Ok(())
}
