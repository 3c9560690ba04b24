use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use newsfeed_api::{build_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("newsfeed_api=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    if !config.has_api_keys() {
        warn!("TAVILY_API_KEY or GEMINI_API_KEY not set; /news will answer 500");
    }

    let addr = config.bind_addr();
    let state = Arc::new(AppState::from_config(config));
    let app = build_router(state);

    info!("Newsfeed API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
