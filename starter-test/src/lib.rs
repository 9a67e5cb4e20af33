//! Test utilities for the starter workspace
//!
//! Fakes for every capability interface (upstream lookups, prompts, user
//! store, password hashing), isolated on-disk environments and fixture
//! documents shaped like the real GitHub and Packagist responses.

pub mod environment;
pub mod fixtures;
pub mod mock;

// Re-export commonly used items
pub use environment::TestEnvironment;
pub use fixtures::{commit_document, packagist_document, sources_json, COMMIT_SHA, OLD_COMMIT_SHA};
pub use mock::{MockHasher, MockPrompter, MockUpstream, MockUserStore};

// Re-export test dependencies for convenience
pub use anyhow::{Context, Result};
pub use tempfile;

/// Initialize test logging (call once per test module)
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("debug")
        .try_init();
}

/// Run a test with a clean environment
pub fn with_test_env<F, R>(f: F) -> Result<R>
where
    F: FnOnce(&TestEnvironment) -> Result<R>,
{
    let env = TestEnvironment::new()?;
    f(&env)
}
