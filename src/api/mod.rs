//! HTTP routing for the bookshelf endpoints

pub mod books;
pub mod index;

use axum::{
    http::StatusCode,
    routing::{get, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{messages, AppState};

/// Generic response for any method/path pair without a handler
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, messages::NOTHING_FOUND)
}

/// Create the application router with all routes.
///
/// Unsupported methods on known paths get the same 404 as unknown paths
/// instead of axum's default 405.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index::serve_index).fallback(not_found))
        .route(
            "/books",
            get(books::list_books)
                .post(books::create_book)
                .fallback(not_found),
        )
        .route(
            "/books/",
            put(books::mark_read)
                .delete(books::delete_book)
                .fallback(not_found),
        )
        .route(
            "/books/:id",
            put(books::mark_read)
                .delete(books::delete_book)
                .fallback(not_found),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
