//! Mock upstream client

use starter_core::{StarterError, StarterResult};
use starter_upstream::UpstreamClient;
use std::cell::RefCell;

#[derive(Debug, Clone)]
enum Canned<T> {
    Value(T),
    Failure(String),
}

/// Upstream client returning canned answers and logging each lookup
pub struct MockUpstream {
    commit: Canned<Option<String>>,
    versions: Canned<Vec<String>>,
    calls: RefCell<Vec<&'static str>>,
}

impl Default for MockUpstream {
    fn default() -> Self {
        Self {
            commit: Canned::Value(None),
            versions: Canned::Value(Vec::new()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl MockUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commit(mut self, sha: &str) -> Self {
        self.commit = Canned::Value(Some(sha.to_string()));
        self
    }

    pub fn with_versions(mut self, versions: &[&str]) -> Self {
        self.versions = Canned::Value(versions.iter().map(|v| v.to_string()).collect());
        self
    }

    /// Commit lookups fail with a network error
    pub fn with_commit_failure(mut self, message: &str) -> Self {
        self.commit = Canned::Failure(message.to_string());
        self
    }

    /// Version lookups fail with a network error
    pub fn with_versions_failure(mut self, message: &str) -> Self {
        self.versions = Canned::Failure(message.to_string());
        self
    }

    /// Lookups performed so far, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }
}

impl UpstreamClient for MockUpstream {
    fn fetch_latest_commit(&self) -> StarterResult<Option<String>> {
        self.calls.borrow_mut().push("fetch_latest_commit");
        match &self.commit {
            Canned::Value(sha) => Ok(sha.clone()),
            Canned::Failure(message) => Err(StarterError::Network(message.clone())),
        }
    }

    fn fetch_package_versions(&self) -> StarterResult<Vec<String>> {
        self.calls.borrow_mut().push("fetch_package_versions");
        match &self.versions {
            Canned::Value(versions) => Ok(versions.clone()),
            Canned::Failure(message) => Err(StarterError::Network(message.clone())),
        }
    }
}
