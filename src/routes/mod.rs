use axum::extract::{Json, State, rejection::JsonRejection};
use serde::Serialize;

use crate::{AppState, error::AppError};

pub mod admin;
pub mod book;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        message: format!("{} is running", state.config.service_name),
    })
}

/// Unwraps a JSON body, turning any rejection into a 400 with `message`.
pub(crate) fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    message: &'static str,
) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            Err(AppError::Validation(message))
        }
    }
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
