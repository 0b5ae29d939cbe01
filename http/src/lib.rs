pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

use std::net::SocketAddr;

use axum::routing::{get, post, put};
use axum::Router;

pub use error::{error_mapper, HttpError};
pub use state::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/v1/sessions", post(handlers::create_session))
        .route(
            "/v1/sessions/{id}/languages",
            put(handlers::select_language),
        )
        .route("/v1/sessions/{id}/swap", post(handlers::swap_languages))
        .route(
            "/v1/sessions/{id}/credential",
            put(handlers::set_credential),
        )
        .route("/v1/sessions/{id}/payload", post(handlers::deliver_payload))
        .route("/v1/sessions/{id}/interpret", post(handlers::interpret))
        .with_state(state)
}

pub async fn serve(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "interpreter http server listening");
    axum::serve(listener, app_router(state)).await
}
