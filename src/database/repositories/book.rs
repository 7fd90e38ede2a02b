use async_trait::async_trait;

use super::PgStore;
use crate::database::{Book, BookStore};

#[async_trait]
impl BookStore for PgStore {
    async fn insert(&self, title: &str, content: &str) -> Result<i32, sqlx::Error> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO books (title, content)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(content)
        .fetch_one(self.pool())
        .await?;

        tracing::debug!("Inserted book {}", id);
        Ok(id)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, sqlx::Error> {
        sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, content
            FROM books
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
    }

    async fn list(&self) -> Result<Vec<Book>, sqlx::Error> {
        sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, content
            FROM books
            ORDER BY id DESC
            "#,
        )
        .fetch_all(self.pool())
        .await
    }

    async fn update(&self, id: i32, title: &str, content: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $1, content = $2
            WHERE id = $3
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(id)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(self.pool())
            .await
    }
}
