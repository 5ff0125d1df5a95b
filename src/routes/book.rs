//! Book CRUD routes.

use crate::handlers::book::{create_book, delete_book, list_books, setup, update_book};
use crate::state::AppState;
use axum::{
    routing::{post, put},
    Router,
};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/setup", post(setup))
        .route("/books", post(create_book).get(list_books))
        .route("/books/:book_id", put(update_book).delete(delete_book))
        .with_state(state)
}
