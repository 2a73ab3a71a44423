// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the hosted board store

use url::Url;

pub const DEFAULT_TABLE: &str = "vibe_boards";

/// Supabase project settings
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: Option<String>,
    /// Anonymous (public) API key
    pub anon_key: Option<String>,
    /// Table boards are inserted into
    pub table: String,
}

impl SupabaseConfig {
    /// Load from a variable lookup. The `NEXT_PUBLIC_` names are accepted as fallbacks.
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url: lookup("SUPABASE_URL")
                .or_else(|| lookup("NEXT_PUBLIC_SUPABASE_URL"))
                .filter(|v| !v.trim().is_empty()),
            anon_key: lookup("SUPABASE_ANON_KEY")
                .or_else(|| lookup("NEXT_PUBLIC_SUPABASE_ANON_KEY"))
                .filter(|v| !v.trim().is_empty()),
            table: lookup("SUPABASE_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string()),
        }
    }

    /// Persistence is enabled only when both URL and key are present
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.anon_key.is_some()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref url) = self.url {
            Url::parse(url).map_err(|e| format!("invalid SUPABASE_URL '{}': {}", url, e))?;
        }
        if self.url.is_some() != self.anon_key.is_some() {
            return Err("SUPABASE_URL and SUPABASE_ANON_KEY must be set together".to_string());
        }
        if self.table.trim().is_empty() {
            return Err("table name must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            table: DEFAULT_TABLE.to_string(),
        }
    }
}
