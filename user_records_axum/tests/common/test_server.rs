use axum::Router;
use tokio::task::JoinHandle;

use user_records_axum::{DataStoreConfig, init, user_records_router};

/// Prefix the routes are mounted under in tests
pub const USERS_PREFIX: &str = "/api/users";

/// Test server for integration testing
///
/// Serves the user routes on an ephemeral port, backed by a private
/// in-memory database, so every test starts from an empty table.
pub struct TestServer {
    server_handle: JoinHandle<()>,
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let store = init(&DataStoreConfig::sqlite_in_memory()).await?;

        let app = Router::new().nest(USERS_PREFIX, user_records_router(store));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let server_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            server_handle,
            base_url: format!("http://{addr}{USERS_PREFIX}"),
            client: reqwest::Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn shutdown(self) {
        self.server_handle.abort();
    }
}
