// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use std::env;
use vibeboard::{
    api::{start_server, AppState},
    config::AppConfig,
    version,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🎨 Starting VibeBoard API...\n");
    println!("📦 BUILD VERSION: {}", version::VERSION);
    println!("📅 Build Date: {}", version::BUILD_DATE);
    println!();

    let config = AppConfig::from_env();
    config.validate().map_err(|e| anyhow!("invalid configuration: {}", e))?;

    let state = AppState::from_config(&config)?;
    println!(
        "🧠 Generation: {}",
        if state.generation_enabled() { "enabled" } else { "disabled (set OPENAI_API_KEY)" }
    );
    println!(
        "💾 Saving: {}",
        if state.persistence_enabled() { "enabled" } else { "disabled (set SUPABASE_URL / SUPABASE_ANON_KEY)" }
    );

    start_server(state, &config.server).await
}
