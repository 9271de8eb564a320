//! Front-end page

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{messages, AppState};

/// Serve the configured index document, read fresh on every request
pub async fn serve_index(State(state): State<AppState>) -> Response {
    let path = &state.config.server.index_path;
    match tokio::fs::read(path).await {
        Ok(bytes) => ([(CONTENT_TYPE, "text/html; charset=utf-8")], bytes).into_response(),
        Err(e) => {
            tracing::warn!("Cannot read index document {}: {}", path.display(), e);
            (StatusCode::NOT_FOUND, messages::INDEX_NOT_FOUND).into_response()
        }
    }
}
