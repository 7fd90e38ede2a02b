use async_trait::async_trait;

use super::PgStore;
use crate::database::{Admin, AdminStore};

#[async_trait]
impl AdminStore for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, sqlx::Error> {
        let mut rows = sqlx::query_as::<_, Admin>(
            r#"
            SELECT id, email, password
            FROM admin
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_all(self.pool())
        .await?;

        if rows.len() != 1 {
            if rows.len() > 1 {
                tracing::warn!("{} admin rows share the same email, refusing login", rows.len());
            }
            return Ok(None);
        }

        Ok(rows.pop())
    }
}
