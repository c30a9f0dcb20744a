//! user_records - storage and CRUD operations for user records
//!
//! A single `users` table (SQLite or PostgreSQL via sqlx) with an
//! auto-assigned integer id and five required text fields, plus the
//! coordination functions that HTTP layers call.

mod config;
mod coordination;
mod storage;
mod userdb;

#[cfg(test)]
mod test_utils;

pub use config::{USERS_ROUTE_PREFIX, validate_route_prefix};

pub use coordination::{
    CoordinationError, StatusMessage, USER_DELETED_MESSAGE, USER_NOT_FOUND_MESSAGE, UserRequest,
    add_user, delete_user, get_user, list_users, update_user,
};

pub use storage::{DataStore, DataStoreConfig, DataStoreType, StorageError};

pub use userdb::{NewUser, User, UserError, UserStore};

/// Open the configured data store and prepare the users table
pub async fn init(config: &DataStoreConfig) -> Result<UserStore, Box<dyn std::error::Error>> {
    let data_store = config.connect()?;
    let store = UserStore::new(data_store);
    store.init().await?;
    Ok(store)
}
