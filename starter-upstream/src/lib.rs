//! Upstream version lookups and update detection
//!
//! [`UpdateChecker`] compares the versions recorded in the upstream sources
//! document against what the upstreams currently publish. Lookups go through
//! the [`UpstreamClient`] capability so the comparison logic can run against
//! fakes; [`HttpUpstreamClient`] is the GitHub/Packagist implementation.

pub mod checker;
pub mod client;
pub mod http;

pub use checker::{UpdateChecker, LARAVEL_OFFICIAL_KEY, MAIN_SENTINEL, TALL_STARTER_KEY};
pub use client::UpstreamClient;
pub use http::HttpUpstreamClient;
