//! Bookshelf: CRUD REST backend for a single `books` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod session;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::{ensure_schema, reset_schema};
pub use model::{Book, BookUpdate, NewBook, Patch};
pub use routes::{app, book_routes, common_routes};
pub use service::BookService;
pub use session::Session;
pub use state::AppState;
pub use store::{connect, memory_pool};
