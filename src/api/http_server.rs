// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Context;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::generate_moodboard::generate_moodboard_handler;
use super::handlers::health_handler;
use super::save_board::save_board_handler;
use crate::config::{AppConfig, ServerConfig};
use crate::generation::{MoodboardOrchestrator, OpenAIClient};
use crate::storage::{BoardStore, SupabaseBoardStore};
use crate::version;

/// Shared handler state
///
/// Either half may be absent: generation needs an OpenAI key, saving needs Supabase.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Option<Arc<MoodboardOrchestrator>>,
    pub board_store: Option<Arc<dyn BoardStore>>,
}

impl AppState {
    pub fn new(
        orchestrator: Option<Arc<MoodboardOrchestrator>>,
        board_store: Option<Arc<dyn BoardStore>>,
    ) -> Self {
        Self {
            orchestrator,
            board_store,
        }
    }

    /// Build clients for every configured backend
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let orchestrator = if config.openai.is_configured() {
            let client = OpenAIClient::new(&config.openai)
                .context("failed to create OpenAI client")?;
            info!(
                "Generation enabled: chat={}, image={}",
                client.chat_model(),
                client.image_model()
            );
            Some(Arc::new(MoodboardOrchestrator::with_client(Arc::new(client))))
        } else {
            warn!("OPENAI_API_KEY not set; moodboard generation disabled");
            None
        };

        let board_store: Option<Arc<dyn BoardStore>> = if config.supabase.is_configured() {
            let store = SupabaseBoardStore::new(&config.supabase)
                .context("failed to create Supabase board store")?;
            Some(Arc::new(store))
        } else {
            warn!("Supabase not configured; saving boards disabled");
            None
        };

        Ok(Self::new(orchestrator, board_store))
    }

    pub fn generation_enabled(&self) -> bool {
        self.orchestrator.is_some()
    }

    pub fn persistence_enabled(&self) -> bool {
        self.board_store.is_some()
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if server.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = server
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

pub fn create_app(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Moodboard generation
        .route("/api/generate-moodboard", post(generate_moodboard_handler))
        // Board persistence
        .route("/api/save-board", post(save_board_handler))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(state: AppState, server: &ServerConfig) -> anyhow::Result<()> {
    let addr = server.listen_addr().map_err(anyhow::Error::msg)?;
    let app = create_app(state, server);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("{} listening on {}", version::get_version_string(), addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("VibeBoard API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
