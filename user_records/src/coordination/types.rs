use serde::{Deserialize, Serialize};

use crate::userdb::{NewUser, User};

use super::errors::CoordinationError;

pub const USER_DELETED_MESSAGE: &str = "User deleted successfully";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Incoming user payload.
///
/// Every field is optional on the wire so that absent fields can be reported
/// together instead of failing on the first one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRequest {
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
}

impl From<NewUser> for UserRequest {
    fn from(user: NewUser) -> Self {
        Self {
            user_id: None,
            name: Some(user.name),
            email: Some(user.email),
            phone: Some(user.phone),
            address: Some(user.address),
            country: Some(user.country),
        }
    }
}

impl From<User> for UserRequest {
    fn from(user: User) -> Self {
        Self {
            user_id: Some(user.user_id),
            name: Some(user.name),
            email: Some(user.email),
            phone: Some(user.phone),
            address: Some(user.address),
            country: Some(user.country),
        }
    }
}

impl UserRequest {
    /// Names of the absent fields, in declaration order
    pub fn missing_fields(&self, require_id: bool) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if require_id && self.user_id.is_none() {
            missing.push("user_id");
        }
        let text_fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("country", &self.country),
        ];
        for (field, value) in text_fields {
            if value.is_none() {
                missing.push(field);
            }
        }
        missing
    }

    /// Payload for an insert; `user_id` is ignored if present
    pub(super) fn into_new_user(self) -> Result<NewUser, CoordinationError> {
        match self {
            Self {
                name: Some(name),
                email: Some(email),
                phone: Some(phone),
                address: Some(address),
                country: Some(country),
                ..
            } => Ok(NewUser {
                name,
                email,
                phone,
                address,
                country,
            }),
            request => Err(missing_fields_error(&request.missing_fields(false))),
        }
    }

    /// Payload for an update; every field including `user_id` is required
    pub(super) fn into_user(self) -> Result<User, CoordinationError> {
        match self {
            Self {
                user_id: Some(user_id),
                name: Some(name),
                email: Some(email),
                phone: Some(phone),
                address: Some(address),
                country: Some(country),
            } => Ok(User {
                user_id,
                name,
                email,
                phone,
                address,
                country,
            }),
            request => Err(missing_fields_error(&request.missing_fields(true))),
        }
    }
}

fn missing_fields_error(fields: &[&str]) -> CoordinationError {
    CoordinationError::Validation(format!(
        "Missing required field(s): {}",
        fields.join(", ")
    ))
    .log()
}

/// Status body returned by operations that have no record to echo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusMessage {
    pub status: String,
}

impl StatusMessage {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }

    pub fn user_deleted() -> Self {
        Self::new(USER_DELETED_MESSAGE)
    }

    pub fn user_not_found() -> Self {
        Self::new(USER_NOT_FOUND_MESSAGE)
    }
}
