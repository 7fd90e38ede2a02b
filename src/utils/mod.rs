use bcrypt::verify;
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::config::Config;

const BCRYPT_PREFIXES: [&str; 4] = ["$2a$", "$2b$", "$2x$", "$2y$"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// Signs an HS256 token for the admin. Nothing in this service verifies it.
pub fn generate_token(
    admin_id: i32,
    email: &str,
    config: &Config,
) -> Result<String, jsonwebtoken::errors::Error> {
    let issued_at = Utc::now();
    let expiration = issued_at
        .checked_add_signed(Duration::seconds(config.jwt_expiration().as_secs() as i64))
        .unwrap_or(issued_at);

    let claims = Claims {
        id: admin_id,
        email: email.to_string(),
        iat: issued_at.timestamp(),
        exp: expiration.timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
}

pub fn is_bcrypt_hash(stored: &str) -> bool {
    BCRYPT_PREFIXES.iter().any(|prefix| stored.starts_with(prefix))
}

/// Checks a login attempt against the stored credential.
///
/// bcrypt hashes are always verified. Anything else is treated as legacy
/// plaintext and only compared when `allow_plaintext` is set.
pub fn verify_password(
    password: &str,
    stored: &str,
    allow_plaintext: bool,
) -> Result<bool, bcrypt::BcryptError> {
    if is_bcrypt_hash(stored) {
        return verify(password.as_bytes(), stored);
    }

    if !allow_plaintext {
        tracing::warn!("Stored admin password is not a bcrypt hash and plaintext login is disabled");
        return Ok(false);
    }

    tracing::warn!("Comparing admin password against plaintext storage; this is insecure");
    Ok(password.as_bytes().ct_eq(stored.as_bytes()).into())
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{DecodingKey, Validation, decode};

    use super::*;

    fn test_config() -> Config {
        Config::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://localhost/test".into()),
            "JWT_SECRET" => Some("test-secret".into()),
            "JWT_EXPIRATION" => Some("1h".into()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn token_carries_admin_id_and_email() {
        let config = test_config();
        let token = generate_token(7, "root@example.com", &config).unwrap();

        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(data.claims.id, 7);
        assert_eq!(data.claims.email, "root@example.com");
        assert_eq!(data.claims.exp - data.claims.iat, 3600);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = generate_token(1, "a@b.c", &test_config()).unwrap();
        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"wrong"),
            &Validation::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn bcrypt_hash_is_verified() {
        let hashed = bcrypt::hash("hunter2", 4).unwrap();
        assert!(is_bcrypt_hash(&hashed));
        assert!(verify_password("hunter2", &hashed, false).unwrap());
        assert!(!verify_password("hunter3", &hashed, false).unwrap());
    }

    #[test]
    fn plaintext_requires_opt_in() {
        assert!(!verify_password("hunter2", "hunter2", false).unwrap());
        assert!(verify_password("hunter2", "hunter2", true).unwrap());
        assert!(!verify_password("hunter2", "hunter22", true).unwrap());
    }
}
