//! OpenAPI document for the book endpoints.

use crate::model::{Book, BookUpdate, NewBook};
use crate::response::Detail;
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "bookshelf", description = "Book catalogue CRUD API"),
    paths(
        crate::handlers::book::setup,
        crate::handlers::book::create_book,
        crate::handlers::book::list_books,
        crate::handlers::book::update_book,
        crate::handlers::book::delete_book,
    ),
    components(schemas(Book, NewBook, BookUpdate, Detail)),
    tags((name = "books", description = "Book records"))
)]
pub struct ApiDoc;

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
