use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed input. The store is never touched.
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Unauthorized(&'static str),
    /// Store, signing or hashing failure. Only `message` reaches the client.
    #[error("{message}: {source}")]
    Internal {
        message: &'static str,
        #[source]
        source: BoxError,
    },
}

impl AppError {
    /// Adapter for `map_err` that tags a failure with the message the client sees.
    pub fn internal<E>(message: &'static str) -> impl FnOnce(E) -> AppError
    where
        E: Into<BoxError>,
    {
        move |source| AppError::Internal {
            message,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation(message)
            | AppError::NotFound(message)
            | AppError::Unauthorized(message) => message,
            AppError::Internal { message, source } => {
                tracing::error!(error = %source, "{}", message);
                message
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(AppError::Validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Unauthorized("x").status(), StatusCode::UNAUTHORIZED);
        let internal = AppError::internal("x")(sqlx::Error::PoolTimedOut);
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn internal_error_hides_source() {
        let err = AppError::internal("Failed to add book")(sqlx::Error::Protocol(
            "relation \"books\" does not exist".into(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "message": "Failed to add book" })
        );
    }

    #[tokio::test]
    async fn validation_error_body() {
        let response = AppError::Validation("Missing ID").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "success": false, "message": "Missing ID" })
        );
    }
}
