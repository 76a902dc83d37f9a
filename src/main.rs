use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use lingochat::application::services::{ChatService, ContentExtractor, PromptComposer};
use lingochat::infrastructure::llm::GeminiChatSession;
use lingochat::infrastructure::observability::init_tracing;
use lingochat::infrastructure::text_processing::{PdfAdapter, PlainTextAdapter};
use lingochat::presentation::config::API_KEY_ENV_VAR;
use lingochat::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&settings.logging, environment, settings.server.port);

    if settings.llm.api_key.is_empty() {
        tracing::warn!(
            env_var = API_KEY_ENV_VAR,
            "No API key configured, chat requests will be rejected by the provider"
        );
    }

    let session = Arc::new(GeminiChatSession::new(
        &settings.llm.base_url,
        &settings.llm.api_key,
        &settings.llm.model,
        settings.llm.request_timeout(),
    )?);
    tracing::info!(model = session.model(), "Chat session created");

    let extractor = ContentExtractor::new(
        Arc::new(PdfAdapter::new(settings.extraction.pdf_timeout())),
        Arc::new(PlainTextAdapter),
    );

    let chat_service = Arc::new(ChatService::new(
        extractor,
        PromptComposer::new(),
        Arc::clone(&session),
    ));

    let state = AppState {
        chat_service,
        max_upload_bytes: settings.server.max_upload_bytes(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
