use axum::extract::{Json, State, rejection::JsonRejection};

use super::model::{LoginRequest, LoginResponse};
use crate::{
    AppState,
    error::AppError,
    routes::json_body,
    utils::{generate_token, verify_password},
};

const LOGIN_FAILED: &str = "Login failed";

/// Issues a signed token for a matching admin. The token is never checked by
/// any other route.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    const INVALID: &str = "Missing email or password";

    let (email, password) = json_body(payload, INVALID)?
        .credentials()
        .ok_or(AppError::Validation(INVALID))?;

    let admin = state
        .admins
        .find_by_email(&email)
        .await
        .map_err(AppError::internal(LOGIN_FAILED))?
        .ok_or(AppError::NotFound("Admin not found"))?;

    let allow_plaintext = state.config.allow_plaintext_passwords;
    let password_ok = tokio::task::spawn_blocking(move || {
        verify_password(&password, &admin.password, allow_plaintext).map(|ok| (ok, admin))
    })
    .await
    .map_err(AppError::internal(LOGIN_FAILED))?
    .map_err(AppError::internal(LOGIN_FAILED))?;

    let admin = match password_ok {
        (true, admin) => admin,
        (false, admin) => {
            tracing::info!("Rejected login for admin {}", admin.id);
            return Err(AppError::Unauthorized("Invalid password"));
        }
    };

    let token = generate_token(admin.id, &admin.email, &state.config)
        .map_err(AppError::internal(LOGIN_FAILED))?;

    tracing::info!("Admin {} logged in", admin.id);
    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful",
        token,
    }))
}
