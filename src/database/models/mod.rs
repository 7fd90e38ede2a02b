mod admin;
mod book;

pub use admin::Admin;
pub use book::Book;
