//! Mock password hasher

use starter_accounts::PasswordHasher;
use starter_core::{StarterError, StarterResult};

/// Deterministic, reversible hasher: `hashed:<password>`
#[derive(Debug, Clone, Default)]
pub struct MockHasher {
    fail_with: Option<String>,
}

impl MockHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure every hash call to fail
    pub fn with_failure(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }
}

impl PasswordHasher for MockHasher {
    fn hash(&self, password: &str) -> StarterResult<String> {
        if let Some(message) = &self.fail_with {
            return Err(StarterError::Other(message.clone()));
        }
        Ok(format!("hashed:{}", password))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        hash.strip_prefix("hashed:") == Some(password)
    }
}
