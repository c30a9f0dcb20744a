use axum::{
    Json, Router,
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    routing::{delete, get, post, put},
};

use user_records::{StatusMessage, User, UserRequest, UserStore};

use crate::error::{ErrorResponse, IntoResponseError};

/// Create a router for the user record endpoints
pub(crate) fn router(store: UserStore) -> Router {
    Router::new()
        .route("/", get(list_users_handler))
        .route("/{user_id}", get(get_user_handler))
        .route("/add", post(add_user_handler))
        .route("/update", put(update_user_handler))
        .route("/delete/{user_id}", delete(delete_user_handler))
        .with_state(store)
}

async fn list_users_handler(
    State(store): State<UserStore>,
) -> Result<Json<Vec<User>>, ErrorResponse> {
    let users = user_records::list_users(&store)
        .await
        .into_response_error()?;
    Ok(Json(users))
}

async fn get_user_handler(
    State(store): State<UserStore>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, ErrorResponse> {
    let Path(user_id) = user_id.into_response_error()?;

    let user = user_records::get_user(&store, user_id)
        .await
        .into_response_error()?;
    Ok(Json(user))
}

/// Insert a user and echo it back with the id storage assigned
async fn add_user_handler(
    State(store): State<UserStore>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<User>, ErrorResponse> {
    let Json(request) = payload.into_response_error()?;

    let user = user_records::add_user(&store, request)
        .await
        .into_response_error()?;
    tracing::debug!(user_id = user.user_id, "Created user");
    Ok(Json(user))
}

async fn update_user_handler(
    State(store): State<UserStore>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<User>, ErrorResponse> {
    let Json(request) = payload.into_response_error()?;

    let user = user_records::update_user(&store, request)
        .await
        .into_response_error()?;
    Ok(Json(user))
}

/// Delete a user; absent ids answer 404 with `{"status": "User not found"}`
async fn delete_user_handler(
    State(store): State<UserStore>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StatusMessage>, ErrorResponse> {
    let Path(user_id) = user_id.into_response_error()?;

    let status = user_records::delete_user(&store, user_id)
        .await
        .into_response_error()?;
    Ok(Json(status))
}
