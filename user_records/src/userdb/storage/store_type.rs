use std::sync::Arc;

use crate::storage::DataStore;
use crate::userdb::{
    errors::UserError,
    types::{NewUser, User},
};

use super::postgres::*;
use super::sqlite::*;

/// Repository over the users table.
///
/// Owns the data store handle; cloning shares the same pool.
#[derive(Clone, Debug)]
pub struct UserStore {
    data_store: Arc<dyn DataStore>,
}

impl UserStore {
    pub fn new(data_store: Arc<dyn DataStore>) -> Self {
        Self { data_store }
    }

    /// Create the users table if needed and check its columns.
    ///
    /// Safe to call more than once.
    pub async fn init(&self) -> Result<(), UserError> {
        let store = &self.data_store;

        match (store.as_sqlite(), store.as_postgres()) {
            (Some(pool), _) => {
                create_tables_sqlite(pool).await?;
                validate_user_tables_sqlite(pool).await?;
                Ok(())
            }
            (_, Some(pool)) => {
                create_tables_postgres(pool).await?;
                validate_user_tables_postgres(pool).await?;
                Ok(())
            }
            _ => Err(UserError::Storage("Unsupported database type".to_string())),
        }
    }

    /// Insert a user; storage assigns the id
    #[tracing::instrument(skip_all)]
    pub async fn insert_user(&self, user: &NewUser) -> Result<User, UserError> {
        let store = &self.data_store;

        let result = if let Some(pool) = store.as_sqlite() {
            insert_user_sqlite(pool, user).await
        } else if let Some(pool) = store.as_postgres() {
            insert_user_postgres(pool, user).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(user) => tracing::info!(user_id = user.user_id, "User inserted"),
            Err(e) => tracing::error!(error = %e, "User insert failed"),
        }

        result
    }

    /// Every user, in ascending `user_id` order
    pub async fn get_all_users(&self) -> Result<Vec<User>, UserError> {
        let store = &self.data_store;

        if let Some(pool) = store.as_sqlite() {
            get_all_users_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            get_all_users_postgres(pool).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Get a user by id; `None` when no row matches
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>, UserError> {
        let store = &self.data_store;

        let result = if let Some(pool) = store.as_sqlite() {
            get_user_by_id_sqlite(pool, user_id).await
        } else if let Some(pool) = store.as_postgres() {
            get_user_by_id_postgres(pool, user_id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(Some(_)) => {
                tracing::info!(found = true, "User lookup completed");
            }
            Ok(None) => {
                tracing::info!(found = false, "User lookup completed - not found");
            }
            Err(e) => {
                tracing::error!(error = %e, "User lookup failed");
            }
        }

        result
    }

    /// Overwrite the five text fields of the row with `user.user_id`.
    ///
    /// Returns `None` when no row has that id; nothing is written then.
    #[tracing::instrument(skip(self, user), fields(user_id = user.user_id))]
    pub async fn update_user(&self, user: &User) -> Result<Option<User>, UserError> {
        let store = &self.data_store;

        let result = if let Some(pool) = store.as_sqlite() {
            update_user_sqlite(pool, user).await
        } else if let Some(pool) = store.as_postgres() {
            update_user_postgres(pool, user).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(Some(_)) => tracing::info!(updated = true, "User update completed"),
            Ok(None) => tracing::info!(updated = false, "User update completed - not found"),
            Err(e) => tracing::error!(error = %e, "User update failed"),
        }

        result
    }

    /// Delete the row with `user_id`; `false` when no row matched
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, user_id: i64) -> Result<bool, UserError> {
        let store = &self.data_store;

        if let Some(pool) = store.as_sqlite() {
            delete_user_sqlite(pool, user_id).await
        } else if let Some(pool) = store.as_postgres() {
            delete_user_postgres(pool, user_id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Close the underlying data store
    pub async fn close(&self) {
        tracing::info!("Closing data store");
        self.data_store.close().await;
    }
}
