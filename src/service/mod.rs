//! BookService: statements against the books table.

mod book;
pub use book::BookService;
