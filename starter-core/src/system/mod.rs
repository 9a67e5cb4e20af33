pub mod paths;
pub mod version;

// Re-export commonly used functions
pub use paths::{accounts_store_path, describe_paths, is_custom_home, settings_path, starter_home};
pub use version::{
    compare_versions, is_newer_version, is_stable_version, latest_stable, natural_cmp,
    parse_version, stable_versions,
};
