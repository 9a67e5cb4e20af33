//! Super admin provisioning
//!
//! [`AdminProvisioner`] drives the interactive flow: collect a name, a valid
//! email and a confirmed password, warn about duplicates, then create the
//! account and grant it the administrative role. Terminal input, storage and
//! password hashing are reached through the [`Prompter`], [`UserStore`] and
//! [`PasswordHasher`] capabilities.

pub mod hasher;
pub mod json_store;
pub mod prompt;
pub mod provisioner;
pub mod store;

pub use hasher::{PasswordHasher, Sha256Hasher};
pub use json_store::JsonUserStore;
pub use prompt::Prompter;
pub use provisioner::{is_valid_email, AdminProvisioner, ProvisionOutcome};
pub use store::{UserRecord, UserStore};
