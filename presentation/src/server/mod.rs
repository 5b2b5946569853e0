//! HTTP API
//!
//! Read-only persona endpoints, the mock chat endpoint, dashboard and pricing
//! data, all behind the [`AccessGate`].

mod error;
mod gate;
mod handlers;
mod state;

pub use error::ApiError;
pub use gate::{AccessGate, access_gate};
pub use state::AppState;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let gate = state.gate.clone();

    Router::new()
        .route("/api/personas", get(handlers::list_personas))
        .route("/api/personas/:id", get(handlers::get_persona))
        .route("/api/chat", post(handlers::chat))
        .route("/api/user/chats/summary", get(handlers::chat_summaries))
        .route("/api/pricing", get(handlers::pricing))
        .route("/auth/signin", get(handlers::sign_in))
        .route("/healthz", get(handlers::health))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(middleware::from_fn_with_state(gate, access_gate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serve until the process is interrupted.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("persona-chat API listening on http://{}", addr);
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
