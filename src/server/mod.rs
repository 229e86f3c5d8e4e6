pub mod handlers;
pub mod types;

use crate::{Result, analysis::Assistant, config::Config, render::Pages};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::ask))
        .route("/api/analyze", post(handlers::analyze))
        .route("/health", get(handlers::health))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    info!("Using CLU endpoint {}", config.clu.endpoint);

    let assistant = Assistant::from_config(config.clu.clone());
    let app = router(AppState::new(assistant, Pages::new()?));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
