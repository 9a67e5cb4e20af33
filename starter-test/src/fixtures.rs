//! Test fixtures shaped like the upstream documents

use serde_json::{json, Map, Value};

/// A full-length commit SHA for the tracked branch head
pub const COMMIT_SHA: &str = "7c1e4b9a2f6d8e0c3b5a7d9f1e2c4b6a8d0f2e4c";

/// An older commit recorded in the sources document
pub const OLD_COMMIT_SHA: &str = "a3f0c2d4e6b8a0c2e4f6b8d0a2c4e6f8b0d2f4a6";

/// Upstream sources document recording the given versions
pub fn sources_json(commit_hash: &str, laravel_version: &str) -> String {
    serde_json::to_string_pretty(&json!({
        "sources": {
            "tall_starter": {
                "current_version": { "commit_hash": commit_hash }
            },
            "laravel_official_livewire": {
                "current_version": { "laravel_version": laravel_version }
            }
        }
    }))
    .expect("fixture serializes")
}

/// GitHub commit document
pub fn commit_document(sha: &str) -> Value {
    json!({
        "sha": sha,
        "commit": { "message": "Update dependencies" },
        "html_url": format!("https://github.com/mortenebak/tallstarter/commit/{}", sha)
    })
}

/// Packagist package document listing `versions`
pub fn packagist_document(versions: &[&str]) -> Value {
    let entries: Map<String, Value> = versions
        .iter()
        .map(|v| (v.to_string(), json!({ "version": v, "require": {} })))
        .collect();

    json!({
        "package": {
            "name": "laravel/framework",
            "versions": entries
        }
    })
}
