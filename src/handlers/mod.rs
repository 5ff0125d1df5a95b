//! HTTP handlers for the book catalogue.

pub mod book;
pub use book::*;
