pub mod account;
pub mod format;
pub mod update;

pub use account::{mask_password, AdminAccountRequest, NewUser};
pub use format::OutputFormat;
pub use update::{UpdateCheckResult, UpdateReport, UNKNOWN_VERSION};
