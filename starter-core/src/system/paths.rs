use crate::Settings;
use std::path::PathBuf;

/// Get the starter home directory
/// Checks STARTER_HOME environment variable, falls back to ${HOME}/.starter
pub fn starter_home() -> PathBuf {
    if let Ok(path) = std::env::var("STARTER_HOME") {
        PathBuf::from(path)
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| {
            std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string())
        });
        PathBuf::from(home).join(".starter")
    }
}

/// Get the settings file path
/// Returns: STARTER_HOME/starter.toml
pub fn settings_path() -> PathBuf {
    starter_home().join("starter.toml")
}

/// Get the account store path, honouring `accounts.store_file` when set
/// Returns: STARTER_HOME/accounts.json by default
pub fn accounts_store_path(settings: &Settings) -> PathBuf {
    settings
        .accounts
        .store_file
        .clone()
        .unwrap_or_else(|| starter_home().join("accounts.json"))
}

/// Check if running with a custom home directory
pub fn is_custom_home() -> bool {
    std::env::var("STARTER_HOME").is_ok()
}

/// Get a human-readable description of the current path configuration
pub fn describe_paths(settings: &Settings) -> String {
    format!(
        "Starter Paths:\n  \
        Home: {}\n  \
        Settings: {}\n  \
        Sources: {}\n  \
        Accounts: {}\n  \
        Custom: {}",
        starter_home().display(),
        settings_path().display(),
        settings.upstream.sources_file.display(),
        accounts_store_path(settings).display(),
        if is_custom_home() { "Yes" } else { "No (using defaults)" }
    )
}
