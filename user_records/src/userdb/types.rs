use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored user record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct User {
    /// Storage-assigned primary key, never changed after insert
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub country: String,
}

/// The five text fields of a user that has not been stored yet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub country: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            country: country.into(),
        }
    }

    /// Attach an id, producing the full record
    pub fn with_id(self, user_id: i64) -> User {
        User {
            user_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            country: self.country,
        }
    }
}

impl User {
    /// Whether the five text fields equal those of `new_user`
    pub fn matches(&self, new_user: &NewUser) -> bool {
        self.name == new_user.name
            && self.email == new_user.email
            && self.phone == new_user.phone
            && self.address == new_user.address
            && self.country == new_user.country
    }
}
