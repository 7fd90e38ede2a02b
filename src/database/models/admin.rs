use sqlx::FromRow;

/// Row of the `admin` table. `password` is either a bcrypt hash or legacy plaintext.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: i32,
    pub email: String,
    pub password: String,
}
