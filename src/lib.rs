pub mod api;
pub mod cache;
pub mod config;
pub mod knowledge;
pub mod models;
pub mod pipeline;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};
use crate::knowledge::{KnowledgeBase, KnowledgeError};

/// Fatal errors raised before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Knowledge base error: {0}")]
    Knowledge(#[from] KnowledgeError),
    #[error("Server error: {0}")]
    Server(#[from] api::ServerError),
    #[error("Failed to listen for shutdown signal: {0}")]
    Signal(std::io::Error),
}

/// Load the configured knowledge base, falling back to the built-in catalog.
pub fn load_knowledge(config: &ServerConfig) -> Result<KnowledgeBase, KnowledgeError> {
    match &config.knowledge_path {
        Some(path) => KnowledgeBase::load(path),
        None => KnowledgeBase::builtin(),
    }
}

/// Start the service and block until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = ServerConfig::from_env()?;
    let knowledge = load_knowledge(&config)?;
    tracing::info!(
        conditions = knowledge.conditions().len(),
        synonyms = knowledge.synonyms().len(),
        "Knowledge base ready"
    );

    let ctx = api::ApiContext::new(Arc::new(knowledge), &config);
    let server = api::start_server_on(ctx, config.bind).await?;
    tracing::info!(
        addr = %server.session.server_addr,
        session_id = %server.session.session_id,
        "Listening"
    );

    tokio::signal::ctrl_c().await.map_err(StartupError::Signal)?;
    tracing::info!("Ctrl-C received, shutting down");
    server.stop().await;

    Ok(())
}
