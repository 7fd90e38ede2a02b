mod handler;
mod model;

pub use handler::{count_books, create_book, delete_book, get_book, list_books, update_book};
