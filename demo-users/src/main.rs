use axum::Router;

use user_records_axum::{
    DataStoreConfig, USERS_ROUTE_PREFIX, user_records_router, validate_route_prefix,
};

mod server;

use crate::server::{init_tracing, serve_http};

const DEFAULT_PORT: u16 = 3001;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing(env!("CARGO_CRATE_NAME"));

    validate_route_prefix(USERS_ROUTE_PREFIX.as_str())?;

    let config = DataStoreConfig::from_env()?;
    let store = user_records_axum::init(&config).await?;

    let app = Router::new().nest(
        USERS_ROUTE_PREFIX.as_str(),
        user_records_router(store.clone()),
    );

    let port = match std::env::var("PORT") {
        Ok(value) => value.parse()?,
        Err(_) => DEFAULT_PORT,
    };

    let result = serve_http(port, app).await;

    store.close().await;
    tracing::info!("Server stopped");

    result?;
    Ok(())
}
