//! Book statements, executed on a caller-supplied session connection.

use crate::error::AppError;
use crate::extractors::Pagination;
use crate::model::{Book, BookUpdate, NewBook};
use sqlx::SqliteConnection;

pub struct BookService;

impl BookService {
    /// Insert one row. Returns the id assigned by storage.
    pub async fn create(conn: &mut SqliteConnection, book: &NewBook) -> Result<i64, AppError> {
        tracing::debug!(title = %book.title, author = %book.author, "insert book");
        let id = sqlx::query("INSERT INTO books (title, author) VALUES (?, ?)")
            .bind(&book.title)
            .bind(&book.author)
            .execute(&mut *conn)
            .await?
            .last_insert_rowid();
        Ok(id)
    }

    /// Page of books in primary-key order.
    pub async fn list(conn: &mut SqliteConnection, page: Pagination) -> Result<Vec<Book>, AppError> {
        tracing::debug!(limit = page.limit, offset = page.offset, "list books");
        let rows = sqlx::query_as::<_, Book>(
            "SELECT id, title, author FROM books ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&mut *conn)
        .await?;
        Ok(rows)
    }

    pub async fn read(conn: &mut SqliteConnection, id: i64) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, Book>("SELECT id, title, author FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Apply the supplied fields to book `id` and return the row as stored afterwards.
    /// `None` when no such book exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        changes: BookUpdate,
    ) -> Result<Option<Book>, AppError> {
        let Some(mut book) = Self::read(conn, id).await? else {
            return Ok(None);
        };
        if changes.is_empty() {
            return Ok(Some(book));
        }
        changes.apply(&mut book);
        tracing::debug!(book_id = id, "update book");
        sqlx::query("UPDATE books SET title = ?, author = ? WHERE id = ?")
            .bind(&book.title)
            .bind(&book.author)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Self::read(conn, id).await
    }

    /// Delete book `id`. Returns false when no such book exists.
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
        tracing::debug!(book_id = id, "delete book");
        let affected = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::reset_schema;
    use crate::model::Patch;
    use crate::session::Session;
    use crate::store::memory_pool;
    use sqlx::SqlitePool;

    async fn seeded(titles: &[(&str, &str)]) -> SqlitePool {
        let pool = memory_pool().await.unwrap();
        reset_schema(&pool).await.unwrap();
        let mut session = Session::begin(&pool).await.unwrap();
        for (title, author) in titles {
            let book = NewBook {
                title: title.to_string(),
                author: author.to_string(),
            };
            BookService::create(session.conn(), &book).await.unwrap();
        }
        session.commit().await.unwrap();
        pool
    }

    #[tokio::test]
    async fn ids_are_assigned_in_order() {
        let pool = seeded(&[("Dune", "Herbert"), ("Emma", "Austen")]).await;
        let mut conn = pool.acquire().await.unwrap();
        let page = Pagination { limit: 20, offset: 0 };
        let books = BookService::list(&mut conn, page).await.unwrap();
        let ids: Vec<i64> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn offset_past_end_is_empty() {
        let pool = seeded(&[("Dune", "Herbert")]).await;
        let mut conn = pool.acquire().await.unwrap();
        let page = Pagination { limit: 20, offset: 5 };
        assert!(BookService::list(&mut conn, page).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_missing_is_none() {
        let pool = seeded(&[]).await;
        let mut conn = pool.acquire().await.unwrap();
        let changes = BookUpdate {
            title: Patch::Set("X".into()),
            author: Patch::Unset,
        };
        assert!(BookService::update(&mut conn, 42, changes).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_title_only() {
        let pool = seeded(&[("Dune", "Herbert")]).await;
        let mut conn = pool.acquire().await.unwrap();
        let changes = BookUpdate {
            title: Patch::Set("Dune Messiah".into()),
            author: Patch::Unset,
        };
        let book = BookService::update(&mut conn, 1, changes).await.unwrap().unwrap();
        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.author, "Herbert");
    }

    #[tokio::test]
    async fn delete_reports_presence() {
        let pool = seeded(&[("Dune", "Herbert")]).await;
        let mut conn = pool.acquire().await.unwrap();
        assert!(BookService::delete(&mut conn, 1).await.unwrap());
        assert!(!BookService::delete(&mut conn, 1).await.unwrap());
    }
}
