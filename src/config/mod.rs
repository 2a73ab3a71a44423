// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration loaded from the environment

pub mod openai;
pub mod server;
pub mod supabase;

pub use openai::OpenAIConfig;
pub use server::ServerConfig;
pub use supabase::SupabaseConfig;

use std::env;

/// Complete service configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub openai: OpenAIConfig,
    pub supabase: SupabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Call `dotenv::dotenv()` first to pick up a local `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            openai: OpenAIConfig::from_lookup(&lookup),
            supabase: SupabaseConfig::from_lookup(&lookup),
            server: ServerConfig::from_lookup(&lookup),
        }
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        self.openai.validate()?;
        self.supabase.validate()?;
        self.server.validate()?;
        Ok(())
    }
}
