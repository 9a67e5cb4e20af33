//! GitHub and Packagist lookups over blocking HTTP

use crate::client::UpstreamClient;
use serde_json::Value;
use starter_core::config::UpstreamSettings;
use starter_core::{StarterError, StarterResult};
use std::time::Duration;
use tracing::debug;

pub struct HttpUpstreamClient {
    client: reqwest::blocking::Client,
    commit_url: String,
    package_url: String,
}

impl HttpUpstreamClient {
    pub fn new(settings: &UpstreamSettings) -> StarterResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| StarterError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            commit_url: settings.commit_url(),
            package_url: settings.package_url(),
        })
    }

    pub fn commit_url(&self) -> &str {
        &self.commit_url
    }

    pub fn package_url(&self) -> &str {
        &self.package_url
    }

    fn get_json(&self, url: &str, failure_reason: &str) -> StarterResult<Value> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|e| StarterError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StarterError::Http {
                status: status.as_u16(),
                reason: failure_reason.to_string(),
            });
        }

        response
            .json::<Value>()
            .map_err(|e| StarterError::Parse(format!("Invalid response from {}: {}", url, e)))
    }
}

impl UpstreamClient for HttpUpstreamClient {
    fn fetch_latest_commit(&self) -> StarterResult<Option<String>> {
        let body = self.get_json(&self.commit_url, "Failed to fetch latest commit")?;
        Ok(commit_sha(&body))
    }

    fn fetch_package_versions(&self) -> StarterResult<Vec<String>> {
        let body = self.get_json(&self.package_url, "Failed to fetch latest version")?;
        Ok(package_versions(&body))
    }
}

/// `sha` field of a commit document
fn commit_sha(body: &Value) -> Option<String> {
    body.get("sha").and_then(Value::as_str).map(str::to_string)
}

/// Keys of `package.versions` in a Packagist package document
fn package_versions(body: &Value) -> Vec<String> {
    body.pointer("/package/versions")
        .and_then(Value::as_object)
        .map(|versions| versions.keys().cloned().collect())
        .unwrap_or_default()
}
