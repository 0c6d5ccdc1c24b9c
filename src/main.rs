//! Adoption Compass service entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use adoption_compass::adapters::http::{assessment_routes, AssessmentHandlers};
use adoption_compass::adapters::memory::InMemorySessionStore;
use adoption_compass::config::AppConfig;
use adoption_compass::domain::survey;
use adoption_compass::ports::SessionStore;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    // The question graph is fixed; an inconsistency is a build defect and
    // must abort startup rather than surface per request.
    survey::startup_check()?;

    if !config.integrations.has_openai_key() {
        warn!("OpenAI API key not configured; integration features stay disabled");
    }

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let handlers = AssessmentHandlers::new(store);

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    let cors = if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    };

    let app = Router::new()
        .nest("/api/assessments", assessment_routes(handlers))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, environment = ?config.server.environment, "assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
