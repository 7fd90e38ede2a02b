use axum::{
    extract::{Json, Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use super::model::{
    CountResponse, CreateBookRequest, CreateBookResponse, MessageResponse, UpdateBookRequest,
    parse_book_id,
};
use crate::{AppState, database::Book, error::AppError, routes::json_body};

#[axum::debug_handler]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<Json<CreateBookResponse>, AppError> {
    const INVALID: &str = "Title and content are required.";

    let (title, content) = json_body(payload, INVALID)?
        .fields()
        .ok_or(AppError::Validation(INVALID))?;

    let book_id = state
        .books
        .insert(&title, &content)
        .await
        .map_err(AppError::internal("Failed to add book"))?;

    tracing::info!("Added book {}", book_id);
    Ok(Json(CreateBookResponse {
        success: true,
        message: "Book added successfully",
        book_id,
    }))
}

/// Missing books answer 404 with a JSON `null` body.
#[axum::debug_handler]
pub async fn get_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<(StatusCode, Json<Option<Book>>), AppError> {
    let id = parse_book_id(&raw_id).ok_or(AppError::Validation("Invalid book id"))?;

    match state
        .books
        .find_by_id(id)
        .await
        .map_err(AppError::internal("Failed to fetch book"))?
    {
        Some(book) => Ok((StatusCode::OK, Json(Some(book)))),
        None => Ok((StatusCode::NOT_FOUND, Json(None))),
    }
}

#[axum::debug_handler]
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    let books = state
        .books
        .list()
        .await
        .map_err(AppError::internal("Failed to fetch books"))?;

    Ok(Json(books))
}

/// Succeeds whether or not the id existed.
#[axum::debug_handler]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_book_id(&raw_id).ok_or(AppError::Validation("Missing ID"))?;

    let affected = state
        .books
        .delete(id)
        .await
        .map_err(AppError::internal("Delete failed"))?;

    if affected == 0 {
        tracing::debug!("Delete of book {} matched no rows", id);
    }
    Ok(Json(MessageResponse::ok("Book deleted")))
}

#[axum::debug_handler]
pub async fn update_book(
    State(state): State<AppState>,
    payload: Result<Json<UpdateBookRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    const INVALID: &str = "Missing required fields";

    let (id, title, content) = json_body(payload, INVALID)?
        .fields()
        .ok_or(AppError::Validation(INVALID))?;

    let affected = state
        .books
        .update(id, &title, &content)
        .await
        .map_err(AppError::internal("Update failed"))?;

    if affected == 0 {
        return Err(AppError::NotFound("Invalid book id"));
    }

    Ok(Json(MessageResponse::ok("Book updated successfully")))
}

#[axum::debug_handler]
pub async fn count_books(State(state): State<AppState>) -> Result<Json<CountResponse>, AppError> {
    let count = state
        .books
        .count()
        .await
        .map_err(AppError::internal("Failed to fetch book count"))?;

    Ok(Json(CountResponse {
        success: true,
        count,
    }))
}
