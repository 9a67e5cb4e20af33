//! In-memory user store

use starter_accounts::{UserRecord, UserStore};
use starter_core::{NewUser, StarterError, StarterResult};
use uuid::Uuid;

/// User store kept in memory, with injectable failures
#[derive(Debug, Default)]
pub struct MockUserStore {
    users: Vec<UserRecord>,
    fail_create: Option<String>,
    fail_assign: Option<String>,
    create_calls: usize,
    assign_calls: usize,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing account
    pub fn with_user(mut self, name: &str, email: &str) -> Self {
        self.users.push(UserRecord::from_new_user(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "hashed:existing".to_string(),
            locale: "en".to_string(),
            email_verified_at: None,
        }));
        self
    }

    pub fn with_create_failure(mut self, message: &str) -> Self {
        self.fail_create = Some(message.to_string());
        self
    }

    pub fn with_assign_failure(mut self, message: &str) -> Self {
        self.fail_assign = Some(message.to_string());
        self
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls
    }

    pub fn assign_calls(&self) -> usize {
        self.assign_calls
    }
}

impl UserStore for MockUserStore {
    fn find_by_email(&self, email: &str) -> StarterResult<Option<UserRecord>> {
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }

    fn create(&mut self, user: NewUser) -> StarterResult<UserRecord> {
        self.create_calls += 1;
        if let Some(message) = &self.fail_create {
            return Err(StarterError::Persistence(message.clone()));
        }

        let record = UserRecord::from_new_user(user);
        self.users.push(record.clone());
        Ok(record)
    }

    fn assign_role(&mut self, user_id: &Uuid, role: &str) -> StarterResult<()> {
        self.assign_calls += 1;
        if let Some(message) = &self.fail_assign {
            return Err(StarterError::Persistence(message.clone()));
        }

        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == *user_id)
            .ok_or_else(|| StarterError::NotFound(format!("user {}", user_id)))?;
        if !user.has_role(role) {
            user.roles.push(role.to_string());
        }
        Ok(())
    }
}
