//! Entry points for the user operations
//!
//! These functions validate request payloads and translate repository
//! absence into [`CoordinationError::ResourceNotFound`], so HTTP layers can
//! pick a status code without inspecting storage results.

mod errors;
mod types;
mod user;

pub use errors::CoordinationError;
pub use types::{StatusMessage, USER_DELETED_MESSAGE, USER_NOT_FOUND_MESSAGE, UserRequest};
pub use user::{add_user, delete_user, get_user, list_users, update_user};
