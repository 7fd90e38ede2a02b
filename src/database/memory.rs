use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use super::{Admin, AdminStore, Book, BookStore};

/// In-process stand-in for PostgreSQL used by the router tests.
#[derive(Default)]
pub struct MemoryStore {
    books: Mutex<BTreeMap<i32, Book>>,
    next_id: Mutex<i32>,
    admins: Mutex<Vec<Admin>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn with_admin(self, id: i32, email: &str, password: &str) -> Self {
        self.admins.lock().unwrap().push(Admin {
            id,
            email: email.to_string(),
            password: password.to_string(),
        });
        self
    }

    /// Makes every subsequent call fail like a dropped connection.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Vec<Book> {
        self.books.lock().unwrap().values().cloned().collect()
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.failing.load(Ordering::SeqCst) {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn insert(&self, title: &str, content: &str) -> Result<i32, sqlx::Error> {
        self.check()?;
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        self.books.lock().unwrap().insert(
            id,
            Book {
                id,
                title: title.to_string(),
                content: content.to_string(),
            },
        );
        Ok(id)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, sqlx::Error> {
        self.check()?;
        Ok(self.books.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Book>, sqlx::Error> {
        self.check()?;
        Ok(self.books.lock().unwrap().values().rev().cloned().collect())
    }

    async fn update(&self, id: i32, title: &str, content: &str) -> Result<u64, sqlx::Error> {
        self.check()?;
        match self.books.lock().unwrap().get_mut(&id) {
            Some(book) => {
                book.title = title.to_string();
                book.content = content.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        self.check()?;
        Ok(self.books.lock().unwrap().remove(&id).map_or(0, |_| 1))
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        self.check()?;
        Ok(self.books.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl AdminStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, sqlx::Error> {
        self.check()?;
        let admins = self.admins.lock().unwrap();
        let mut matching = admins.iter().filter(|admin| admin.email == email);
        match (matching.next(), matching.next()) {
            (Some(admin), None) => Ok(Some(admin.clone())),
            _ => Ok(None),
        }
    }
}
