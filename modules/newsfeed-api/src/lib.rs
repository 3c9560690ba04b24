pub mod cache;
pub mod clock;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod rest;
pub mod testing;
pub mod traits;
pub mod types;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use ai_client::Gemini;
use tavily_client::TavilyClient;

pub use cache::ArticleCache;
pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use enrichment::ArticleEnricher;
pub use error::ApiError;
pub use traits::{NewsSearcher, TextGenerator};
pub use types::ArticleRecord;

pub struct AppState {
    pub config: Config,
    pub searcher: Arc<dyn NewsSearcher>,
    pub enricher: ArticleEnricher,
    pub cache: ArticleCache,
}

impl AppState {
    pub fn new(
        config: Config,
        searcher: Arc<dyn NewsSearcher>,
        generator: Arc<dyn TextGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            searcher,
            enricher: ArticleEnricher::new(generator, clock.clone()),
            cache: ArticleCache::new(clock),
        }
    }

    /// Production wiring: Tavily search, Gemini generation, wall-clock time.
    /// Missing keys are tolerated here and rejected per request.
    pub fn from_config(config: Config) -> Self {
        let searcher = TavilyClient::new(config.tavily_api_key.as_deref().unwrap_or_default())
            .with_base_url(&config.tavily_base_url);
        let generator = Gemini::new(
            config.gemini_api_key.clone().unwrap_or_default(),
            config.gemini_model.clone(),
        );

        Self::new(
            config,
            Arc::new(searcher),
            Arc::new(generator),
            Arc::new(SystemClock),
        )
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // REST API
        .route("/news", get(rest::api_news))
        .with_state(state)
        // CORS: any origin, method, and header, with credentials. Wildcards
        // are rejected alongside credentials, so the request is mirrored.
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true),
        )
        // Logging layer: method + path + status + latency
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
