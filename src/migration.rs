//! DDL for the `books` table: full reset and create-if-missing.

use crate::error::AppError;
use sqlx::SqlitePool;

pub const BOOKS_TABLE: &str = "books";

const CREATE_BOOKS: &str = r#"
    CREATE TABLE books (
        id INTEGER NOT NULL PRIMARY KEY,
        title TEXT NOT NULL,
        author TEXT NOT NULL
    )
"#;

const CREATE_BOOKS_IF_MISSING: &str = r#"
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER NOT NULL PRIMARY KEY,
        title TEXT NOT NULL,
        author TEXT NOT NULL
    )
"#;

/// Drop the books table if present and recreate it empty.
/// Both statements run in one transaction; on failure the old table survives.
pub async fn reset_schema(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;
    sqlx::query(&format!("DROP TABLE IF EXISTS {}", BOOKS_TABLE))
        .execute(&mut *tx)
        .await?;
    sqlx::query(CREATE_BOOKS).execute(&mut *tx).await?;
    tx.commit().await?;
    tracing::info!(table = BOOKS_TABLE, "schema reset");
    Ok(())
}

/// Create the books table when it does not exist yet. Existing rows are kept.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(CREATE_BOOKS_IF_MISSING).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory_pool;

    async fn count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn reset_wipes_rows() {
        let pool = memory_pool().await.unwrap();
        reset_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO books (title, author) VALUES ('Dune', 'Herbert')")
            .execute(&pool)
            .await
            .unwrap();
        assert_eq!(count(&pool).await, 1);

        reset_schema(&pool).await.unwrap();
        assert_eq!(count(&pool).await, 0);
    }

    #[tokio::test]
    async fn ensure_keeps_rows() {
        let pool = memory_pool().await.unwrap();
        ensure_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO books (title, author) VALUES ('Emma', 'Austen')")
            .execute(&pool)
            .await
            .unwrap();
        ensure_schema(&pool).await.unwrap();
        assert_eq!(count(&pool).await, 1);
    }
}
