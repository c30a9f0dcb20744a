//! Data store configuration

use std::{env, fmt, str::FromStr, sync::Arc};

use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::types::{DataStore, PostgresDataStore, SqliteDataStore};
use crate::storage::errors::StorageError;

const DEFAULT_STORE_TYPE: &str = "sqlite";
const DEFAULT_STORE_URL: &str = "sqlite:users.db";
const IN_MEMORY_SQLITE_URL: &str = "sqlite::memory:";

/// Supported relational engines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataStoreType {
    Sqlite,
    Postgres,
}

impl FromStr for DataStoreType {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            t => Err(StorageError::Config(format!(
                "Unsupported store type: {t}. Supported types are 'sqlite' and 'postgres'"
            ))),
        }
    }
}

impl fmt::Display for DataStoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Postgres => write!(f, "postgres"),
        }
    }
}

/// Where and how to open the data store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataStoreConfig {
    pub store_type: DataStoreType,
    pub url: String,
}

impl DataStoreConfig {
    pub fn new(store_type: DataStoreType, url: impl Into<String>) -> Self {
        Self {
            store_type,
            url: url.into(),
        }
    }

    /// A private SQLite database that lives as long as the returned handle.
    pub fn sqlite_in_memory() -> Self {
        Self::new(DataStoreType::Sqlite, IN_MEMORY_SQLITE_URL)
    }

    /// Read `GENERIC_DATA_STORE_TYPE` and `GENERIC_DATA_STORE_URL`.
    ///
    /// Defaults: `sqlite` and `sqlite:users.db`.
    pub fn from_env() -> Result<Self, StorageError> {
        Self::from_values(
            env::var("GENERIC_DATA_STORE_TYPE").ok().as_deref(),
            env::var("GENERIC_DATA_STORE_URL").ok(),
        )
    }

    fn from_values(store_type: Option<&str>, url: Option<String>) -> Result<Self, StorageError> {
        let store_type = store_type.unwrap_or(DEFAULT_STORE_TYPE).parse()?;
        let url = url.unwrap_or_else(|| DEFAULT_STORE_URL.to_string());
        Ok(Self::new(store_type, url))
    }

    pub fn is_in_memory(&self) -> bool {
        self.store_type == DataStoreType::Sqlite
            && (self.url.contains(":memory:") || self.url.contains("mode=memory"))
    }

    /// Build the pool for this configuration.
    ///
    /// Connections are opened lazily on first use. An in-memory SQLite
    /// database is pinned to a single connection that never expires, since
    /// every new connection would otherwise see an empty database.
    pub fn connect(&self) -> Result<Arc<dyn DataStore>, StorageError> {
        tracing::info!(
            store_type = %self.store_type,
            url = %self.url,
            "Initializing data store"
        );

        let store: Arc<dyn DataStore> = match self.store_type {
            DataStoreType::Sqlite => {
                let opts = SqliteConnectOptions::from_str(&self.url)
                    .map_err(|e| {
                        StorageError::Config(format!(
                            "Failed to parse SQLite connection string: {e}"
                        ))
                    })?
                    .create_if_missing(true);

                let pool_options = if self.is_in_memory() {
                    SqlitePoolOptions::new()
                        .max_connections(1)
                        .idle_timeout(None)
                        .max_lifetime(None)
                } else {
                    SqlitePoolOptions::new()
                };

                Arc::new(SqliteDataStore {
                    pool: pool_options.connect_lazy_with(opts),
                })
            }
            DataStoreType::Postgres => {
                let pool = PgPoolOptions::new().connect_lazy(&self.url).map_err(|e| {
                    StorageError::Config(format!("Failed to create Postgres pool: {e}"))
                })?;
                Arc::new(PostgresDataStore { pool })
            }
        };

        tracing::info!(store_type = %self.store_type, "Data store ready");

        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Helper struct to safely manage environment variables during tests
    struct EnvVarGuard {
        key: String,
        original_value: Option<String>,
    }

    impl EnvVarGuard {
        fn set(key: &str, value: &str) -> Self {
            let original_value = env::var(key).ok();
            // Use unsafe block for env var manipulation as it affects global state
            unsafe {
                env::set_var(key, value);
            }
            Self {
                key: key.to_string(),
                original_value,
            }
        }

        fn remove(key: &str) -> Self {
            let original_value = env::var(key).ok();
            unsafe {
                env::remove_var(key);
            }
            Self {
                key: key.to_string(),
                original_value,
            }
        }
    }

    impl Drop for EnvVarGuard {
        // Restore the original environment variable when the guard is dropped
        fn drop(&mut self) {
            unsafe {
                match &self.original_value {
                    Some(value) => env::set_var(&self.key, value),
                    None => env::remove_var(&self.key),
                }
            }
        }
    }

    #[test]
    fn test_store_type_parsing() {
        assert_eq!(
            "sqlite".parse::<DataStoreType>().unwrap(),
            DataStoreType::Sqlite
        );
        assert_eq!(
            "Postgres".parse::<DataStoreType>().unwrap(),
            DataStoreType::Postgres
        );
        assert_eq!(
            "postgresql".parse::<DataStoreType>().unwrap(),
            DataStoreType::Postgres
        );
    }

    #[test]
    fn test_unsupported_store_type() {
        let err = "mysql".parse::<DataStoreType>().unwrap_err();
        assert!(matches!(err, StorageError::Config(_)));
        assert!(err.to_string().contains("Unsupported store type: mysql"));
    }

    #[test]
    fn test_from_values_defaults() {
        let config = DataStoreConfig::from_values(None, None).unwrap();
        assert_eq!(config.store_type, DataStoreType::Sqlite);
        assert_eq!(config.url, "sqlite:users.db");
        assert!(!config.is_in_memory());
    }

    #[test]
    #[serial]
    fn test_from_env_custom() {
        let _type_guard = EnvVarGuard::set("GENERIC_DATA_STORE_TYPE", "postgres");
        let _url_guard =
            EnvVarGuard::set("GENERIC_DATA_STORE_URL", "postgres://localhost/users_test");

        let config = DataStoreConfig::from_env().unwrap();
        assert_eq!(config.store_type, DataStoreType::Postgres);
        assert_eq!(config.url, "postgres://localhost/users_test");
    }

    #[test]
    #[serial]
    fn test_from_env_missing_uses_defaults() {
        let _type_guard = EnvVarGuard::remove("GENERIC_DATA_STORE_TYPE");
        let _url_guard = EnvVarGuard::remove("GENERIC_DATA_STORE_URL");

        let config = DataStoreConfig::from_env().unwrap();
        assert_eq!(config, DataStoreConfig::from_values(None, None).unwrap());
    }

    #[test]
    #[serial]
    fn test_from_env_unsupported_type() {
        let _type_guard = EnvVarGuard::set("GENERIC_DATA_STORE_TYPE", "unsupported");

        let result = DataStoreConfig::from_env();
        assert!(matches!(result, Err(StorageError::Config(_))));
    }

    #[test]
    fn test_is_in_memory() {
        assert!(DataStoreConfig::sqlite_in_memory().is_in_memory());
        assert!(
            DataStoreConfig::new(
                DataStoreType::Sqlite,
                "sqlite:file:users?mode=memory&cache=shared"
            )
            .is_in_memory()
        );
        assert!(!DataStoreConfig::new(DataStoreType::Sqlite, "sqlite:/tmp/users.db").is_in_memory());
        assert!(
            !DataStoreConfig::new(DataStoreType::Postgres, "postgres://localhost/:memory:")
                .is_in_memory()
        );
    }

    #[tokio::test]
    async fn test_connect_sqlite_in_memory() {
        let store = DataStoreConfig::sqlite_in_memory().connect().unwrap();
        assert!(store.as_sqlite().is_some());
        assert!(store.as_postgres().is_none());

        let pool = store.as_sqlite().unwrap();
        let one: i64 = sqlx::query_scalar("SELECT 1").fetch_one(pool).await.unwrap();
        assert_eq!(one, 1);

        store.close().await;
        assert!(pool.is_closed());
    }

    #[tokio::test]
    async fn test_in_memory_database_survives_between_statements() {
        let store = DataStoreConfig::sqlite_in_memory().connect().unwrap();
        let pool = store.as_sqlite().unwrap();

        sqlx::query("CREATE TABLE sample (v INTEGER NOT NULL)")
            .execute(pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO sample (v) VALUES (7)")
            .execute(pool)
            .await
            .unwrap();

        let v: i64 = sqlx::query_scalar("SELECT v FROM sample")
            .fetch_one(pool)
            .await
            .unwrap();
        assert_eq!(v, 7);
    }

    #[tokio::test]
    async fn test_connect_postgres_invalid_url() {
        let config = DataStoreConfig::new(DataStoreType::Postgres, "not a url");
        let result = config.connect();
        assert!(matches!(result, Err(StorageError::Config(_))));
    }
}
