//! Upstream sources document
//!
//! The document records the version of each upstream the scaffold was last
//! synced from:
//!
//! ```json
//! { "sources": {
//!     "tall_starter": { "current_version": { "commit_hash": "..." } },
//!     "laravel_official_livewire": { "current_version": { "laravel_version": "11.0.0" } } } }
//! ```
//!
//! Every level is optional. Absent version fields read as `"unknown"`. A level
//! written as `null` or `[]` (PHP's encoding of an empty array) reads as empty.

use crate::types::UNKNOWN_VERSION;
use crate::StarterError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

pub const COMMIT_HASH_KEY: &str = "commit_hash";
pub const LARAVEL_VERSION_KEY: &str = "laravel_version";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamSourcesConfig {
    #[serde(default, deserialize_with = "empty_as_default")]
    pub sources: Sources,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sources {
    #[serde(default, deserialize_with = "empty_as_default")]
    pub tall_starter: SourceEntry,
    #[serde(default, deserialize_with = "empty_as_default")]
    pub laravel_official_livewire: SourceEntry,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceEntry {
    #[serde(default, deserialize_with = "empty_as_default")]
    pub current_version: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
}

/// `null` and `[]` deserialize as `T::default()`
fn empty_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(T::default()),
        Value::Array(items) if items.is_empty() => Ok(T::default()),
        other => serde_json::from_value(other).map_err(serde::de::Error::custom),
    }
}

impl SourceEntry {
    /// Current version recorded under `key`, or `"unknown"` when absent or not a string
    pub fn version(&self, key: &str) -> String {
        self.current_version
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_VERSION)
            .to_string()
    }

    pub fn with_version(key: &str, value: &str) -> Self {
        let mut current_version = Map::new();
        current_version.insert(key.to_string(), Value::String(value.to_string()));
        Self {
            current_version,
            repository_url: None,
        }
    }
}

impl UpstreamSourcesConfig {
    pub fn commit_hash(&self) -> String {
        self.sources.tall_starter.version(COMMIT_HASH_KEY)
    }

    pub fn laravel_version(&self) -> String {
        self.sources.laravel_official_livewire.version(LARAVEL_VERSION_KEY)
    }

    pub fn from_json(contents: &str) -> Result<Self, StarterError> {
        serde_json::from_str(contents).map_err(|e| {
            StarterError::Configuration(format!("Failed to parse upstream sources: {}", e))
        })
    }
}

/// Load the upstream sources document, reporting a missing file as `ConfigMissing`
pub fn load_sources<P: AsRef<Path>>(path: P) -> Result<UpstreamSourcesConfig, StarterError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(StarterError::ConfigMissing(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;
    UpstreamSourcesConfig::from_json(&contents)
}
