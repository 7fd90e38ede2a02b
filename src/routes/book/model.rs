use serde::{Deserialize, Serialize};

use crate::routes::non_empty;

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl CreateBookRequest {
    /// Both fields, or `None` if either is missing or empty.
    pub fn fields(self) -> Option<(String, String)> {
        Some((non_empty(self.title)?, non_empty(self.content)?))
    }
}

#[derive(Debug, Serialize)]
pub struct CreateBookResponse {
    pub success: bool,
    pub message: &'static str,
    pub book_id: i32,
}

/// Body id as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BookIdInput {
    Number(i64),
    Text(String),
}

impl BookIdInput {
    fn resolve(self) -> Option<i32> {
        match self {
            BookIdInput::Number(n) => i32::try_from(n).ok(),
            BookIdInput::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    pub id: Option<BookIdInput>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdateBookRequest {
    pub fn fields(self) -> Option<(i32, String, String)> {
        let id = self.id?.resolve().filter(|id| *id != 0)?;
        Some((id, non_empty(self.title)?, non_empty(self.content)?))
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn ok(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub success: bool,
    pub count: i64,
}

/// Parses a path segment into a book id from its leading integer, so `12abc`
/// and `1.5` read as 12 and 1. No digits, zero, or overflow yield `None`.
pub fn parse_book_id(raw: &str) -> Option<i32> {
    let rest = raw.trim_start();
    let sign_len = usize::from(rest.starts_with(['+', '-']));
    let digits_len = rest[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }

    rest[..sign_len + digits_len]
        .parse::<i32>()
        .ok()
        .filter(|id| *id != 0)
}
