use serde::{Deserialize, Serialize};

use crate::routes::non_empty;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn credentials(self) -> Option<(String, String)> {
        Some((non_empty(self.email)?, non_empty(self.password)?))
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub token: String,
}
