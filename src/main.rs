use anyhow::Context;
use sprout::api::{self, app_state::AppState};
use sprout::config::loader::ConfigLoader;
use sprout::knowledge::{KnowledgeTable, ResponseSelector};
use sprout::observability::{ObservabilityState, init_tracing};
use sprout::security::auth::JwtAuth;
use sprout::services::create_chat_service;
use sprout::storage::StorageFactory;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("Failed to load configuration")?;
    ConfigLoader::validate(&config).context("Invalid configuration")?;

    let _log_guard = init_tracing(&config.logging);
    info!(
        "Starting {} ({} environment)...",
        config.app_name, config.environment
    );

    let table = match &config.chat.knowledge_path {
        Some(path) => {
            let table = KnowledgeTable::from_json_file(path)
                .with_context(|| format!("Failed to load knowledge table from {:?}", path))?;
            Arc::new(table)
        }
        None => KnowledgeTable::builtin(),
    };
    info!("Knowledge table ready with {} categories", table.len());

    let repository = StorageFactory::create(&config.database)
        .await
        .context("Failed to initialize chat history storage")?;
    info!("Chat history storage initialized");

    let chat_service = create_chat_service(
        ResponseSelector::new(table),
        repository.clone(),
        config.chat.reply_on_storage_failure,
    );
    info!("Chat service initialized");

    let observability = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        repository,
    ));

    let app_state = AppState::new(
        chat_service,
        Box::new(JwtAuth::from_config(&config.security)),
        observability,
    );
    let router = api::create_router(app_state, &config.server);
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
