//! Mock implementations for testing
//!
//! Hand-written fakes for the capability interfaces, recording every call so
//! tests can assert on what the flow asked for.

mod hasher;
mod prompter;
mod upstream;
mod user_store;

pub use hasher::MockHasher;
pub use prompter::{MockPrompter, PromptEvent};
pub use upstream::MockUpstream;
pub use user_store::MockUserStore;
