#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use starter_test::TestEnvironment;
use std::path::PathBuf;

/// Get the starter binary command
pub fn starter_cmd() -> Command {
    Command::cargo_bin("starter").unwrap()
}

/// Starter command isolated to `env`, run from its project directory
pub fn starter_cmd_in(env: &TestEnvironment) -> Command {
    let mut cmd = starter_cmd();
    cmd.current_dir(env.project_dir())
        .env_remove("RUST_LOG")
        .env_remove("STARTER_SETTINGS");
    for (key, value) in env.env_vars() {
        cmd.env(key, value);
    }
    cmd
}

/// Write settings pointing both upstreams at `base_url`
pub fn write_server_settings(env: &TestEnvironment, base_url: &str) -> Result<PathBuf> {
    let settings = env.settings_for_server(base_url);
    Ok(env.write_settings(&settings)?)
}

/// Run a blocking closure off the async test runtime
pub async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}
