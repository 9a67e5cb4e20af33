//! Core utilities and types shared across all starter crates

pub mod config;
pub mod error;
pub mod system;
pub mod types;

// Re-export commonly used types
pub use config::{load_settings, load_settings_or_default, save_settings, Settings};
pub use config::sources::{load_sources, SourceEntry, UpstreamSourcesConfig};
pub use error::{StarterError, StarterResult};

pub use types::{
    mask_password, AdminAccountRequest, NewUser, OutputFormat, UpdateCheckResult, UpdateReport,
    UNKNOWN_VERSION,
};

// Re-export system utilities
pub use system::{
    // Path functions
    starter_home,
    settings_path,
    accounts_store_path,
    // Version functions
    compare_versions,
    is_newer_version,
    is_stable_version,
    latest_stable,
    natural_cmp,
};

/// Version information for the starter tooling
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
