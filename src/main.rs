mod config;
mod domain;
mod error;
mod markdown;
mod services;
mod state;
mod web;

use crate::config::Config;
use crate::services::ai::AiService;
use crate::state::{AppState, SharedState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    if config.openai_api_key.is_some() {
        tracing::info!("Insight provider: OpenAI ({})", config.openai_model);
    } else {
        tracing::info!("OPENAI_API_KEY not set, serving rule-based suggestions only");
    }

    let ai = AiService::openai(config.openai_api_key.clone(), config.openai_model.clone());
    let shared: SharedState = Arc::new(AppState::new(ai));

    let app = web::app(shared);

    tracing::info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
