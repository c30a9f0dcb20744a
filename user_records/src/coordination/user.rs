use crate::userdb::{User, UserStore};

use super::errors::CoordinationError;
use super::types::{StatusMessage, UserRequest};

/// Validate an insert payload and store it
///
/// Returns the stored record including the id assigned by storage.
pub async fn add_user(store: &UserStore, request: UserRequest) -> Result<User, CoordinationError> {
    let new_user = request.into_new_user()?;
    let user = store.insert_user(&new_user).await?;
    Ok(user)
}

/// Every stored user, in ascending id order
pub async fn list_users(store: &UserStore) -> Result<Vec<User>, CoordinationError> {
    let users = store.get_all_users().await?;
    tracing::debug!(count = users.len(), "Listed users");
    Ok(users)
}

pub async fn get_user(store: &UserStore, user_id: i64) -> Result<User, CoordinationError> {
    store
        .get_user(user_id)
        .await?
        .ok_or_else(|| CoordinationError::user_not_found(user_id).log())
}

/// Overwrite every text field of an existing user
///
/// The id in the payload selects the row and is never changed. An id with
/// no matching row is reported as not found.
pub async fn update_user(
    store: &UserStore,
    request: UserRequest,
) -> Result<User, CoordinationError> {
    let user = request.into_user()?;
    let user_id = user.user_id;

    store
        .update_user(&user)
        .await?
        .ok_or_else(|| CoordinationError::user_not_found(user_id).log())
}

/// Delete a user, reporting not found when no row had that id
pub async fn delete_user(
    store: &UserStore,
    user_id: i64,
) -> Result<StatusMessage, CoordinationError> {
    if store.delete_user(user_id).await? {
        tracing::info!(user_id, "User deleted");
        Ok(StatusMessage::user_deleted())
    } else {
        Err(CoordinationError::user_not_found(user_id).log())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_user, init_test_store};
    use crate::userdb::{NewUser, UserError};

    #[tokio::test]
    async fn test_add_user_assigns_integer_id() {
        let store = init_test_store().await;
        let request = UserRequest::from(NewUser::new("John Doe", "jd@x.com", "123", "St", "USA"));

        let user = add_user(&store, request).await.unwrap();

        assert_eq!(
            user,
            NewUser::new("John Doe", "jd@x.com", "123", "St", "USA").with_id(1)
        );
    }

    #[tokio::test]
    async fn test_add_user_missing_field_is_validation_error() {
        let store = init_test_store().await;
        let request = UserRequest {
            phone: None,
            ..UserRequest::from(create_test_user("partial"))
        };

        let result = add_user(&store, request).await;

        assert!(matches!(result, Err(CoordinationError::Validation(_))));
        assert!(list_users(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let store = init_test_store().await;

        let result = get_user(&store, 42).await;

        match result {
            Err(e) => assert!(e.is_not_found()),
            Ok(user) => panic!("Expected not found, got {user:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_user_round_trip() {
        let store = init_test_store().await;
        let inserted = add_user(&store, create_test_user("before").into())
            .await
            .unwrap();

        let changes = User {
            name: "Updated Name".to_string(),
            country: "Lebanon".to_string(),
            ..inserted.clone()
        };
        let updated = update_user(&store, changes.clone().into()).await.unwrap();

        assert_eq!(updated, changes);
        assert_eq!(get_user(&store, inserted.user_id).await.unwrap(), changes);
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let store = init_test_store().await;
        let ghost = create_test_user("ghost").with_id(9999);

        let result = update_user(&store, ghost.into()).await;

        assert!(matches!(
            result,
            Err(CoordinationError::ResourceNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = init_test_store().await;
        let inserted = add_user(&store, create_test_user("gone").into())
            .await
            .unwrap();

        let status = delete_user(&store, inserted.user_id).await.unwrap();
        assert_eq!(status, StatusMessage::user_deleted());

        let result = get_user(&store, inserted.user_id).await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let store = init_test_store().await;

        let result = delete_user(&store, 9999).await;

        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let store = init_test_store().await;
        store.close().await;

        let result = list_users(&store).await;

        assert!(matches!(
            result,
            Err(CoordinationError::UserError(UserError::Storage(_)))
        ));
    }
}
