//! HTTP boundary exposing the restyle and chat flows.
//!
//! Two JSON endpoints mirror the CLI flows: `POST /stylize_image` and
//! `POST /chat`. Field validation failures map to 400, downstream service
//! failures to 500, and the method router rejects anything but POST with
//! 405.

pub mod chat;
pub mod stylize;

use crate::app::App;
use crate::{Error, Result};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Shared error response used by both endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Build the application router.
pub fn router(app: Arc<App>) -> Router {
    Router::new()
        .route("/stylize_image", post(stylize::stylize_image))
        .route("/chat", post(chat::chat_with_gemini))
        .with_state(app)
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve requests until the process is stopped.
pub async fn serve(app: Arc<App>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(app)).await?;
    Ok(())
}

/// Map a flow error onto the HTTP response it should surface as.
pub(crate) fn error_response(err: &Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("Request failed: {}", err);
    }

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
