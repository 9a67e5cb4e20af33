//! Results of upstream update checks

use serde::{Deserialize, Serialize};

/// Placeholder for a version that is not recorded or could not be read
pub const UNKNOWN_VERSION: &str = "unknown";

/// Outcome of checking a single upstream source
///
/// An errored check never claims an update and never carries a latest value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCheckResult {
    pub has_update: bool,
    pub current: String,
    pub latest: Option<String>,
    pub repository: String,
    pub error: Option<String>,
}

impl UpdateCheckResult {
    /// A completed lookup
    pub fn checked(
        current: impl Into<String>,
        latest: Option<String>,
        has_update: bool,
        repository: impl Into<String>,
    ) -> Self {
        Self {
            has_update: has_update && latest.is_some(),
            current: current.into(),
            latest,
            repository: repository.into(),
            error: None,
        }
    }

    /// A lookup that failed before a latest value was known
    pub fn failed(
        current: impl Into<String>,
        repository: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            has_update: false,
            current: current.into(),
            latest: None,
            repository: repository.into(),
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Latest value for display, `"unknown"` when none was obtained
    pub fn latest_or_unknown(&self) -> &str {
        self.latest.as_deref().unwrap_or(UNKNOWN_VERSION)
    }
}

/// Combined result of both upstream checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateReport {
    pub tall_starter: UpdateCheckResult,
    pub laravel_official: UpdateCheckResult,
}

impl UpdateReport {
    pub fn any_update(&self) -> bool {
        self.tall_starter.has_update || self.laravel_official.has_update
    }

    pub fn errors(&self) -> Vec<(&'static str, &str)> {
        [
            ("tall_starter", &self.tall_starter),
            ("laravel_official", &self.laravel_official),
        ]
        .into_iter()
        .filter_map(|(key, result)| result.error.as_deref().map(|e| (key, e)))
        .collect()
    }

    pub fn to_json_pretty(&self) -> Result<String, crate::StarterError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
