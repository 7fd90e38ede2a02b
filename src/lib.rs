use std::sync::Arc;

use config::Config;
use database::{AdminStore, BookStore};

pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod router;
pub mod utils;

pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookStore>,
    pub admins: Arc<dyn AdminStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(books: Arc<dyn BookStore>, admins: Arc<dyn AdminStore>, config: Config) -> Self {
        Self {
            books,
            admins,
            config,
        }
    }
}
