//! relay-chat - browser chat UI in front of a chat-completion API
//!
//! Every page carries its own transcript; the server keeps no state
//! between requests.

mod api;
mod chat;
mod config;
mod llm;
mod render;
mod transcript;

use api::{create_router, AppState};
use config::AppConfig;
use llm::{CompletionGateway, LoggingGateway, OpenAIGateway};
use render::Renderer;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay_chat=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    let config = AppConfig::from_env();

    // A missing key is not fatal: each send reports it instead
    let openai = OpenAIGateway::new(&config.llm)?;
    if openai.has_credential() {
        tracing::info!(model = %openai.model_id(), "Completion gateway initialized");
    } else {
        tracing::warn!(
            model = %openai.model_id(),
            "No LLM credentials configured. Set OPENAI_API_KEY."
        );
    }
    let gateway: Arc<dyn CompletionGateway> = Arc::new(LoggingGateway::new(Arc::new(openai)));

    let state = AppState::new(gateway, Renderer::new()?, config.seed());

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(compression)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("relay-chat listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT - shutting down"),
        () = terminate => tracing::info!("Received SIGTERM - shutting down"),
    }
}
