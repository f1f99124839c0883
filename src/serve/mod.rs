mod handlers;
mod models;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{GalleryConfig, ServerConfig};

pub struct AppState {
    pub config: GalleryConfig,
}

pub fn run_serve(config: GalleryConfig, server: ServerConfig) -> Result<()> {
    let output_dir = config.output_dir().to_path_buf();
    let state = Arc::new(AppState { config });

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let app = build_router(state);

        let addr = server.socket_addr();
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!(%addr, output_dir = %output_dir.display(), "serving gallery");
        println!("Serving {} on http://{}", output_dir.display(), addr);
        println!("Press Ctrl+C to stop.");

        axum::serve(listener, app).await?;

        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(handlers::gallery_page))
        .route("/index.php", get(handlers::gallery_page))
        .route("/api/health", get(handlers::health))
        .route("/{*path}", get(handlers::serve_file))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
