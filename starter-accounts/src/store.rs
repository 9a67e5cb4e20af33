//! User store capability

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use starter_core::{NewUser, StarterResult};
use uuid::Uuid;

/// A persisted account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub locale: String,
    pub email_verified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn from_new_user(user: NewUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            locale: user.locale,
            email_verified_at: user.email_verified_at,
            roles: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Account persistence used by the provisioning flow
pub trait UserStore {
    fn find_by_email(&self, email: &str) -> StarterResult<Option<UserRecord>>;

    fn create(&mut self, user: NewUser) -> StarterResult<UserRecord>;

    /// Grant `role` to an existing account; granting a held role is a no-op
    fn assign_role(&mut self, user_id: &Uuid, role: &str) -> StarterResult<()>;
}
