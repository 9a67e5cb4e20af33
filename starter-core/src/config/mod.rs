//! Configuration types for the starter tooling

pub mod sources;

use crate::StarterError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub admin: AdminSettings,
    #[serde(default)]
    pub accounts: AccountsSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamSettings {
    /// Upstream sources document, relative paths resolve against the working directory
    #[serde(default = "default_sources_file")]
    pub sources_file: PathBuf,
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,
    #[serde(default = "default_packagist_url")]
    pub packagist_url: String,
    /// GitHub repository tracked by commit, as "owner/repo"
    #[serde(default = "default_commit_repository")]
    pub commit_repository: String,
    #[serde(default = "default_commit_branch")]
    pub commit_branch: String,
    #[serde(default = "default_commit_repository_url")]
    pub commit_repository_url: String,
    /// Packagist package tracked by semantic version, as "vendor/package"
    #[serde(default = "default_package_name")]
    pub package_name: String,
    #[serde(default = "default_package_repository_url")]
    pub package_repository_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSettings {
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_admin_name")]
    pub default_name: String,
    #[serde(default = "default_admin_email")]
    pub default_email: String,
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
    /// Cap on re-prompts per field (unset = retry until valid)
    #[serde(default)]
    pub max_attempts: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AccountsSettings {
    /// Account store location (defaults to $STARTER_HOME/accounts.json)
    #[serde(default)]
    pub store_file: Option<PathBuf>,
}

// Default value functions
fn default_sources_file() -> PathBuf {
    PathBuf::from("config/upstream-sources.json")
}
fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}
fn default_packagist_url() -> String {
    "https://packagist.org".to_string()
}
fn default_commit_repository() -> String {
    "mortenebak/tallstarter".to_string()
}
fn default_commit_branch() -> String {
    "main".to_string()
}
fn default_commit_repository_url() -> String {
    "https://github.com/mortenebak/tallstarter".to_string()
}
fn default_package_name() -> String {
    "laravel/framework".to_string()
}
fn default_package_repository_url() -> String {
    "https://github.com/laravel/framework".to_string()
}
fn default_user_agent() -> String {
    format!("starter/{}", crate::VERSION)
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_role() -> String {
    "Super Admin".to_string()
}
fn default_locale() -> String {
    "en".to_string()
}
fn default_admin_name() -> String {
    "Super Admin".to_string()
}
fn default_admin_email() -> String {
    "admin@example.com".to_string()
}
fn default_min_password_length() -> usize {
    8
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            sources_file: default_sources_file(),
            github_api_url: default_github_api_url(),
            packagist_url: default_packagist_url(),
            commit_repository: default_commit_repository(),
            commit_branch: default_commit_branch(),
            commit_repository_url: default_commit_repository_url(),
            package_name: default_package_name(),
            package_repository_url: default_package_repository_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            role: default_role(),
            locale: default_locale(),
            default_name: default_admin_name(),
            default_email: default_admin_email(),
            min_password_length: default_min_password_length(),
            max_attempts: None,
        }
    }
}

impl UpstreamSettings {
    /// Commit lookup endpoint for the tracked branch head
    pub fn commit_url(&self) -> String {
        format!(
            "{}/repos/{}/commits/{}",
            self.github_api_url.trim_end_matches('/'),
            self.commit_repository,
            self.commit_branch
        )
    }

    /// Package metadata endpoint listing all published versions
    pub fn package_url(&self) -> String {
        format!(
            "{}/packages/{}.json",
            self.packagist_url.trim_end_matches('/'),
            self.package_name
        )
    }
}

pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, StarterError> {
    let contents = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&contents)
        .map_err(|e| StarterError::Configuration(format!("Failed to parse settings: {}", e)))?;
    Ok(settings)
}

/// Load settings from `path`, falling back to defaults when the file does not exist
pub fn load_settings_or_default<P: AsRef<Path>>(path: P) -> Result<Settings, StarterError> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("No settings at {}, using defaults", path.display());
        return Ok(Settings::default());
    }
    load_settings(path)
}

pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<(), StarterError> {
    let contents = toml::to_string_pretty(settings)
        .map_err(|e| StarterError::Configuration(format!("Failed to serialize settings: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
