//! Book CRUD handlers: schema reset, create, list, update, delete.

use crate::error::AppError;
use crate::extractors::{Pagination, ValidJson};
use crate::migration::reset_schema;
use crate::model::{Book, BookUpdate, NewBook};
use crate::response::Detail;
use crate::service::BookService;
use crate::session::Session;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::invalid_field("book_id", "must be an integer"))
}

/// POST /setup — drop and recreate the books table.
#[utoipa::path(
    post,
    path = "/setup",
    tag = "books",
    responses((status = 200, description = "Table recreated empty", body = Detail))
)]
pub async fn setup(State(state): State<AppState>) -> Result<Json<Detail>, AppError> {
    reset_schema(&state.pool).await?;
    Ok(Json(Detail::new("books table recreated")))
}

/// POST /books — echoes the submitted fields; the new id is not returned.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = NewBook,
    responses(
        (status = 200, description = "Book stored", body = NewBook),
        (status = 422, description = "Malformed body"),
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidJson(book): ValidJson<NewBook>,
) -> Result<Json<NewBook>, AppError> {
    let mut session = Session::begin_write(&state.pool).await?;
    let id = BookService::create(session.conn(), &book).await?;
    session.commit().await?;
    tracing::info!(book_id = id, "book created");
    Ok(Json(book))
}

#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(Pagination),
    responses(
        (status = 200, description = "Page of books", body = [Book]),
        (status = 422, description = "Invalid limit or offset"),
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    page: Pagination,
) -> Result<Json<Vec<Book>>, AppError> {
    let mut session = Session::begin(&state.pool).await?;
    let books = BookService::list(session.conn(), page).await?;
    Ok(Json(books))
}

/// PUT /books/{book_id} — only the supplied fields change.
#[utoipa::path(
    put,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = i64, Path, description = "Book id")),
    request_body = BookUpdate,
    responses(
        (status = 200, description = "Book after the update", body = Book),
        (status = 404, description = "book not found"),
        (status = 422, description = "Malformed body"),
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    ValidJson(changes): ValidJson<BookUpdate>,
) -> Result<Json<Book>, AppError> {
    let id = parse_id(&id_str)?;
    let mut session = Session::begin_write(&state.pool).await?;
    let book = BookService::update(session.conn(), id, changes)
        .await?
        .ok_or_else(AppError::book_not_found)?;
    session.commit().await?;
    tracing::info!(book_id = id, "book updated");
    Ok(Json(book))
}

#[utoipa::path(
    delete,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book removed", body = Detail),
        (status = 404, description = "book not found"),
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Detail>, AppError> {
    let id = parse_id(&id_str)?;
    let mut session = Session::begin_write(&state.pool).await?;
    if !BookService::delete(session.conn(), id).await? {
        return Err(AppError::book_not_found());
    }
    session.commit().await?;
    tracing::info!(book_id = id, "book deleted");
    Ok(Json(Detail::book_deleted(id)))
}
