//! Account provisioning types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operator input collected for a new administrative account
#[derive(Clone, PartialEq, Eq)]
pub struct AdminAccountRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub locale: String,
}

// Keep the password out of logs and panics
impl std::fmt::Debug for AdminAccountRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccountRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &mask_password(&self.password))
            .field("locale", &self.locale)
            .finish()
    }
}

impl AdminAccountRequest {
    /// Attributes handed to the user store, with the password already hashed
    pub fn into_new_user(self, password_hash: String, verified_at: DateTime<Utc>) -> NewUser {
        NewUser {
            name: self.name,
            email: self.email,
            password_hash,
            locale: self.locale,
            email_verified_at: Some(verified_at),
        }
    }
}

/// Attributes for creating a user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub locale: String,
    pub email_verified_at: Option<DateTime<Utc>>,
}

/// Same length as the password, every character replaced by `*`
pub fn mask_password(password: &str) -> String {
    "*".repeat(password.chars().count())
}
