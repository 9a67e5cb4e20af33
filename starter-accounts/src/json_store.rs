//! Account store backed by a JSON file

use crate::store::{UserRecord, UserStore};
use serde::{Deserialize, Serialize};
use starter_core::{NewUser, StarterError, StarterResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    users: Vec<UserRecord>,
}

/// Accounts kept in a single JSON document, rewritten on every change
///
/// Emails are unique (case-insensitive); creating a second account with a
/// taken email fails.
pub struct JsonUserStore {
    path: PathBuf,
    users: Vec<UserRecord>,
}

impl JsonUserStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open<P: AsRef<Path>>(path: P) -> StarterResult<Self> {
        let path = path.as_ref().to_path_buf();

        let users = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let file: StoreFile = serde_json::from_str(&contents).map_err(|e| {
                StarterError::Persistence(format!(
                    "Corrupt account store {}: {}",
                    path.display(),
                    e
                ))
            })?;
            file.users
        } else {
            Vec::new()
        };

        debug!("Opened account store {} ({} users)", path.display(), users.len());
        Ok(Self { path, users })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    fn save(&self) -> StarterResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(&StoreFile {
            users: self.users.clone(),
        })?;

        // Write then rename so a crash never leaves a half-written store
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl UserStore for JsonUserStore {
    fn find_by_email(&self, email: &str) -> StarterResult<Option<UserRecord>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn create(&mut self, user: NewUser) -> StarterResult<UserRecord> {
        if self.find_by_email(&user.email)?.is_some() {
            return Err(StarterError::AlreadyExists(format!(
                "user with email {}",
                user.email
            )));
        }

        let record = UserRecord::from_new_user(user);
        self.users.push(record.clone());

        if let Err(e) = self.save() {
            self.users.pop();
            return Err(e);
        }

        debug!("Created user {} <{}>", record.id, record.email);
        Ok(record)
    }

    fn assign_role(&mut self, user_id: &Uuid, role: &str) -> StarterResult<()> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == *user_id)
            .ok_or_else(|| StarterError::NotFound(format!("user {}", user_id)))?;

        if user.roles.iter().any(|r| r == role) {
            return Ok(());
        }
        user.roles.push(role.to_string());

        self.save()?;
        debug!("Assigned role '{}' to {}", role, user_id);
        Ok(())
    }
}
