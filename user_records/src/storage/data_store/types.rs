use async_trait::async_trait;
use sqlx::{Pool, Postgres, Sqlite};

// Types
#[derive(Clone, Debug)]
pub(crate) struct SqliteDataStore {
    pub(super) pool: sqlx::SqlitePool,
}

#[derive(Clone, Debug)]
pub(crate) struct PostgresDataStore {
    pub(super) pool: sqlx::PgPool,
}

/// Handle to the relational store backing the user table.
///
/// Exactly one of `as_sqlite` / `as_postgres` returns a pool. Callers borrow
/// a connection per statement; sqlx returns it to the pool on every exit path.
#[async_trait]
pub trait DataStore: Send + Sync + std::fmt::Debug {
    fn as_sqlite(&self) -> Option<&Pool<Sqlite>>;
    fn as_postgres(&self) -> Option<&Pool<Postgres>>;

    /// Close every connection. Statements issued afterwards fail.
    async fn close(&self);
}

// Store implementations
#[async_trait]
impl DataStore for SqliteDataStore {
    fn as_sqlite(&self) -> Option<&Pool<Sqlite>> {
        Some(&self.pool)
    }

    fn as_postgres(&self) -> Option<&Pool<Postgres>> {
        None
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl DataStore for PostgresDataStore {
    fn as_sqlite(&self) -> Option<&Pool<Sqlite>> {
        None
    }

    fn as_postgres(&self) -> Option<&Pool<Postgres>> {
        Some(&self.pool)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
