use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::{self, AppState};

pub async fn run(listen_address: &str, state: Arc<AppState>) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = axum::Router::new()
        .nest("/api", api::router(state))
        .fallback_service(ServeDir::new("frontend/dist"))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(listen_address)
        .await
        .with_context(|| format!("Failed to bind {listen_address}"))?;
    tracing::info!("Web server running at http://{listen_address}");
    axum::serve(listener, app)
        .await
        .context("Web server failed")?;
    Ok(())
}
