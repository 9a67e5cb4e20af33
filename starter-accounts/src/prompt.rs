//! Operator interaction capability

use starter_core::StarterResult;

/// Terminal prompts and feedback for interactive flows
pub trait Prompter {
    /// Free-text answer; an empty answer selects `default`
    fn input(&mut self, prompt: &str, default: &str) -> StarterResult<String>;

    /// Hidden answer, never echoed
    fn secret(&mut self, prompt: &str) -> StarterResult<String>;

    fn confirm(&mut self, prompt: &str, default: bool) -> StarterResult<bool>;

    fn error(&mut self, message: &str);

    fn warning(&mut self, message: &str);
}
