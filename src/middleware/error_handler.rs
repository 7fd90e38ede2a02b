use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::error;

/// Logs every 5xx response with the request that produced it. The cause is
/// logged where the error is turned into a response.
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let response = next.run(req).await;

    if response.status().is_server_error() {
        error!(
            "Server error on {} {} - Status: {}",
            method,
            path,
            response.status()
        );
    }

    response
}
