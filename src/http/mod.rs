//! HTTP server implementation using axum.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub mod handlers;

/// Create the HTTP router with all endpoints.
///
/// CORS is permissive: the API is consumed directly by a browser front
/// end served from another origin.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/player/{region}", get(handlers::get_player))
        .route(
            "/api/player-details/{region}",
            get(handlers::get_player_details),
        )
        .route(
            "/api/match-history/{region_routing}/{puuid}",
            get(handlers::get_match_history),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(bind_addr: SocketAddr, state: Arc<AppState>) -> std::io::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("HTTP server listening on {bind_addr}");

    axum::serve(listener, app).await
}
