//! Storage seam between the HTTP handlers and PostgreSQL.
//!
//! Every method issues exactly one autocommitted statement; there are no
//! transactions and no retries.

use async_trait::async_trait;

pub mod models;
pub mod repositories;

#[cfg(test)]
pub mod memory;

pub use models::{Admin, Book};
pub use repositories::PgStore;

#[async_trait]
pub trait BookStore: Send + Sync {
    /// Inserts a book and returns the id assigned by the database.
    async fn insert(&self, title: &str, content: &str) -> Result<i32, sqlx::Error>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, sqlx::Error>;

    /// All books, newest id first.
    async fn list(&self) -> Result<Vec<Book>, sqlx::Error>;

    /// Returns the number of rows affected.
    async fn update(&self, id: i32, title: &str, content: &str) -> Result<u64, sqlx::Error>;

    /// Returns the number of rows affected.
    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error>;

    async fn count(&self) -> Result<i64, sqlx::Error>;
}

#[async_trait]
pub trait AdminStore: Send + Sync {
    /// Looks up the admin for `email`. Yields `None` unless exactly one row matches.
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, sqlx::Error>;
}
