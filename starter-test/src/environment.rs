//! Test environment management
//!
//! Provides isolated on-disk environments with automatic cleanup using RAII.
//! Nothing here touches the process environment; hand [`TestEnvironment::env_vars`]
//! to spawned commands instead.

use anyhow::{Context, Result};
use starter_core::{save_settings, Settings};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated starter home plus a project directory holding the sources document
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::with_prefix("starter-test")
            .context("Failed to create temporary directory")?;

        std::fs::create_dir_all(temp_dir.path().join("home"))?;
        std::fs::create_dir_all(temp_dir.path().join("project").join("config"))?;

        Ok(Self { temp_dir })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory used as STARTER_HOME
    pub fn home_dir(&self) -> PathBuf {
        self.root().join("home")
    }

    /// Working directory of the scaffolded application
    pub fn project_dir(&self) -> PathBuf {
        self.root().join("project")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.home_dir().join("starter.toml")
    }

    pub fn accounts_path(&self) -> PathBuf {
        self.home_dir().join("accounts.json")
    }

    /// Default location of the sources document inside the project
    pub fn sources_path(&self) -> PathBuf {
        self.project_dir().join("config").join("upstream-sources.json")
    }

    /// Write settings to STARTER_HOME/starter.toml
    pub fn write_settings(&self, settings: &Settings) -> Result<PathBuf> {
        let path = self.settings_path();
        save_settings(&path, settings)?;
        Ok(path)
    }

    /// Settings whose upstream endpoints both point at `base_url`
    pub fn settings_for_server(&self, base_url: &str) -> Settings {
        let mut settings = Settings::default();
        settings.upstream.github_api_url = base_url.to_string();
        settings.upstream.packagist_url = base_url.to_string();
        settings.upstream.timeout_secs = 5;
        settings.accounts.store_file = Some(self.accounts_path());
        settings
    }

    /// Write the sources document to its default project location
    pub fn write_sources(&self, contents: &str) -> Result<PathBuf> {
        let path = self.sources_path();
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Environment variables isolating a spawned command to this environment
    pub fn env_vars(&self) -> Vec<(&'static str, String)> {
        vec![
            ("STARTER_HOME", self.home_dir().to_string_lossy().to_string()),
            ("STARTER_LOG", "warn".to_string()),
        ]
    }
}
