use std::path::PathBuf;

use axum::{Router, routing::post};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use tictactoe_common::log;

use crate::move_handler::{MOVE_PATH, move_handler};

/// API routes plus the browser client served from `static_files_path`.
/// `/` resolves to `index.html`, unknown files answer 404.
pub fn build_router(static_files_path: PathBuf) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(MOVE_PATH, post(move_handler))
        .fallback_service(ServeDir::new(static_files_path))
        .layer(cors)
}

pub async fn run_web_server<F>(
    listener: TcpListener,
    static_files_path: PathBuf,
    shutdown_signal: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(static_files_path.clone());

    if let Ok(addr) = listener.local_addr() {
        log!(
            "Web server listening on http://{} (static files from {})",
            addr,
            static_files_path.display()
        );
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}

pub async fn ctrl_c_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    log!("Shutdown signal received");
}
