//! Update detection for the commit-tracked and release-tracked upstreams

use crate::client::UpstreamClient;
use starter_core::config::sources::{SourceEntry, COMMIT_HASH_KEY, LARAVEL_VERSION_KEY};
use starter_core::config::UpstreamSettings;
use starter_core::{
    is_newer_version, latest_stable, UpdateCheckResult, UpdateReport, UpstreamSourcesConfig,
};
use tracing::{debug, info, warn};

/// Commit value meaning "track the branch head"; never flagged as outdated
pub const MAIN_SENTINEL: &str = "main";

/// Report key of the commit-tracked source
pub const TALL_STARTER_KEY: &str = "tall_starter";

/// Report key of the release-tracked source
pub const LARAVEL_OFFICIAL_KEY: &str = "laravel_official";

/// Compares recorded upstream versions against what the upstreams publish
pub struct UpdateChecker<C> {
    client: C,
    commit_repository_url: String,
    package_repository_url: String,
}

impl<C: UpstreamClient> UpdateChecker<C> {
    pub fn new(client: C, settings: &UpstreamSettings) -> Self {
        Self {
            client,
            commit_repository_url: settings.commit_repository_url.clone(),
            package_repository_url: settings.package_repository_url.clone(),
        }
    }

    /// Check both sources, commit source first
    ///
    /// Lookup failures are reported per source and never abort the check.
    pub fn check(&self, config: &UpstreamSourcesConfig) -> UpdateReport {
        self.check_with_progress(config, |_| {})
    }

    /// Like [`check`](Self::check), calling `on_source` with each report key
    /// (`tall_starter`, `laravel_official`) just before that source is looked up
    pub fn check_with_progress<F>(
        &self,
        config: &UpstreamSourcesConfig,
        mut on_source: F,
    ) -> UpdateReport
    where
        F: FnMut(&'static str),
    {
        on_source(TALL_STARTER_KEY);
        let tall_starter = self.check_commit_source(&config.sources.tall_starter);

        on_source(LARAVEL_OFFICIAL_KEY);
        let laravel_official = self.check_semver_source(&config.sources.laravel_official_livewire);

        UpdateReport {
            tall_starter,
            laravel_official,
        }
    }

    /// Compare a recorded commit hash against the branch head
    pub fn check_commit_source(&self, entry: &SourceEntry) -> UpdateCheckResult {
        let current = entry.version(COMMIT_HASH_KEY);
        let repository = entry
            .repository_url
            .clone()
            .unwrap_or_else(|| self.commit_repository_url.clone());

        let latest = match self.client.fetch_latest_commit() {
            Ok(latest) => latest,
            Err(e) => {
                warn!("Commit lookup for {} failed: {}", repository, e);
                return UpdateCheckResult::failed(current, repository, e.to_string());
            }
        };

        let has_update = match &latest {
            Some(sha) => current != MAIN_SENTINEL && *sha != current,
            None => false,
        };

        debug!(
            "{}: current={} latest={:?} has_update={}",
            repository, current, latest, has_update
        );
        if has_update {
            info!("New commit available for {}", repository);
        }

        UpdateCheckResult::checked(current, latest, has_update, repository)
    }

    /// Compare a recorded semantic version against the newest stable release
    pub fn check_semver_source(&self, entry: &SourceEntry) -> UpdateCheckResult {
        let current = entry.version(LARAVEL_VERSION_KEY);
        let repository = entry
            .repository_url
            .clone()
            .unwrap_or_else(|| self.package_repository_url.clone());

        let versions = match self.client.fetch_package_versions() {
            Ok(versions) => versions,
            Err(e) => {
                warn!("Version lookup for {} failed: {}", repository, e);
                return UpdateCheckResult::failed(current, repository, e.to_string());
            }
        };

        let latest = latest_stable(&versions);
        let has_update = latest
            .as_deref()
            .map(|latest| is_newer_version(latest, &current))
            .unwrap_or(false);

        debug!(
            "{}: {} published versions, current={} latest={:?} has_update={}",
            repository,
            versions.len(),
            current,
            latest,
            has_update
        );
        if has_update {
            info!("New release available for {}", repository);
        }

        UpdateCheckResult::checked(current, latest, has_update, repository)
    }
}
