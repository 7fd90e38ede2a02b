use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{AppState, middleware::log_errors, routes};

pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/books",
            post(routes::book::create_book)
                .get(routes::book::list_books)
                .put(routes::book::update_book),
        )
        // Static segment, matched before `/books/{id}`.
        .route("/books/count", get(routes::book::count_books))
        .route(
            "/books/{id}",
            get(routes::book::get_book).delete(routes::book::delete_book),
        )
}

pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/login", post(routes::admin::login))
}

/// Open to every origin. No route checks the login token.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::health))
        .merge(book_routes())
        .merge(admin_routes())
        .layer(axum::middleware::from_fn(log_errors))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
