//! Shared helpers for the unit tests in this crate

use crate::storage::DataStoreConfig;
use crate::userdb::{NewUser, UserStore};

/// Open a private in-memory store with the users table created
///
/// Every call returns an isolated database, so tests can run in parallel.
pub(crate) async fn init_test_store() -> UserStore {
    let data_store = DataStoreConfig::sqlite_in_memory()
        .connect()
        .expect("Failed to open in-memory data store");
    let store = UserStore::new(data_store);
    store
        .init()
        .await
        .expect("Failed to initialize UserStore");
    store
}

/// Build a user payload whose fields carry `suffix`
pub(crate) fn create_test_user(suffix: &str) -> NewUser {
    NewUser::new(
        format!("Test User {suffix}"),
        format!("user-{suffix}@example.com"),
        "1234567890",
        format!("{suffix} Main St"),
        "USA",
    )
}
