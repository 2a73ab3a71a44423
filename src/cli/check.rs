// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Args;

use crate::config::AppConfig;
use crate::generation::OpenAIClient;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Override the chat model used for the check
    #[arg(long)]
    pub model: Option<String>,
}

/// Send a tiny chat completion and print the reply
pub async fn check(args: CheckArgs) -> Result<()> {
    dotenv::dotenv().ok();
    let mut config = AppConfig::from_env();
    if let Some(model) = args.model {
        config.openai.chat_model = model;
    }

    let client = OpenAIClient::new(&config.openai)?;
    println!("🔌 Testing OpenAI connection ({})...", client.chat_model());

    let reply = client.check_connection().await?;
    println!("✅ Connected: {}", reply.trim());
    Ok(())
}
