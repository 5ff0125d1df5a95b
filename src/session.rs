//! Request-scoped database session.
//!
//! A [`Session`] owns one transaction for the lifetime of a request. It must be
//! committed explicitly; every other exit path (early `?` return, panic, the
//! handler future being dropped on client disconnect) drops the transaction,
//! which rolls it back.
//!
//! Mutating requests use [`Session::begin_write`], which takes the SQLite write
//! lock up front. A deferred transaction that reads before writing holds a
//! shared lock, and two of those upgrading at once fail with SQLITE_BUSY
//! without waiting on the busy timeout.

use crate::error::AppError;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    pub async fn begin(pool: &SqlitePool) -> Result<Self, AppError> {
        let tx = pool.begin().await?;
        Ok(Session { tx })
    }

    /// Session for a request that writes: `BEGIN IMMEDIATE`.
    pub async fn begin_write(pool: &SqlitePool) -> Result<Self, AppError> {
        let tx = pool.begin_with("BEGIN IMMEDIATE").await?;
        Ok(Session { tx })
    }

    /// Connection bound to this session's transaction.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut *self.tx
    }

    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await?;
        tracing::debug!("session committed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::ensure_schema;
    use crate::store::memory_pool;

    async fn count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    async fn insert_one(session: &mut Session) {
        sqlx::query("INSERT INTO books (title, author) VALUES ('Ulysses', 'Joyce')")
            .execute(session.conn())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn dropped_session_rolls_back() {
        let pool = memory_pool().await.unwrap();
        ensure_schema(&pool).await.unwrap();

        let mut session = Session::begin(&pool).await.unwrap();
        insert_one(&mut session).await;
        drop(session);

        assert_eq!(count(&pool).await, 0);
    }

    #[tokio::test]
    async fn committed_session_persists() {
        let pool = memory_pool().await.unwrap();
        ensure_schema(&pool).await.unwrap();

        let mut session = Session::begin_write(&pool).await.unwrap();
        insert_one(&mut session).await;
        session.commit().await.unwrap();

        assert_eq!(count(&pool).await, 1);
    }
}
