mod completion;
mod config;
mod errors;
mod pdf;
mod routes;
mod state;
mod tailoring;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::completion::{CannedCompletion, CompletionBackend, OpenAiCompletion};
use crate::config::Config;
use crate::pdf::PdfExporter;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tailor API v{}", env!("CARGO_PKG_VERSION"));

    // Select the completion backend once; handlers only ever see the trait
    let completion: Arc<dyn CompletionBackend> = if config.mock_mode {
        info!("Mock mode enabled: completion calls return canned content");
        Arc::new(CannedCompletion)
    } else {
        Arc::new(OpenAiCompletion::new(config.openai_api_key.clone()))
    };

    // Browsers are launched per request; this only carries launch config
    let pdf = PdfExporter::new(&config);

    let state = AppState { completion, pdf };

    // Build router. CORS stays wide open: browser clients call from any origin.
    // The raised body limit admits large resumes and full HTML documents.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(config::MAX_BODY_BYTES));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
