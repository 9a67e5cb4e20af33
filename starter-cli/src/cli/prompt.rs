//! Terminal prompter backed by dialoguer

use crate::cli::output;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password};
use starter_accounts::Prompter;
use starter_core::{StarterError, StarterResult};

pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&mut self, prompt: &str, default: &str) -> StarterResult<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn secret(&mut self, prompt: &str) -> StarterResult<String> {
        // Length rules are enforced by the provisioner, not here
        Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(prompt_error)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> StarterResult<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn error(&mut self, message: &str) {
        output::error(message);
    }

    fn warning(&mut self, message: &str) {
        output::warning(message);
    }
}

fn prompt_error(err: dialoguer::Error) -> StarterError {
    match err {
        dialoguer::Error::IO(io) => StarterError::Io(io),
    }
}
