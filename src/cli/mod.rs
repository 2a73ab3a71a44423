// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod check;
pub mod generate;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// VibeBoard CLI
#[derive(Parser, Debug)]
#[command(name = "vibeboard-cli")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "Generate and save moodboards from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a moodboard for a prompt and print it as JSON
    Generate(generate::GenerateArgs),

    /// Test connectivity to the OpenAI API
    Check(check::CheckArgs),
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => generate::generate(args).await,
        Commands::Check(args) => check::check(args).await,
    }
}
