//! Scripted prompter

use starter_accounts::Prompter;
use starter_core::{StarterError, StarterResult};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Answer {
    Text(String),
    Secret(String),
    Confirm(bool),
}

/// Everything the flow showed the operator, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Input(String),
    Secret(String),
    Confirm(String),
    Error(String),
    Warning(String),
}

/// Prompter that replays a fixed script of answers
///
/// Running past the end of the script, or asking for a different kind of
/// answer than the next one scripted, is an error so a looping flow fails
/// instead of hanging.
#[derive(Debug, Default)]
pub struct MockPrompter {
    script: VecDeque<Answer>,
    events: Vec<PromptEvent>,
}

impl MockPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next free-text answer; an empty string accepts the default
    pub fn answer(mut self, text: &str) -> Self {
        self.script.push_back(Answer::Text(text.to_string()));
        self
    }

    pub fn secret(mut self, text: &str) -> Self {
        self.script.push_back(Answer::Secret(text.to_string()));
        self
    }

    pub fn confirm(mut self, yes: bool) -> Self {
        self.script.push_back(Answer::Confirm(yes));
        self
    }

    pub fn events(&self) -> &[PromptEvent] {
        &self.events
    }

    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PromptEvent::Error(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PromptEvent::Warning(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of times `prompt` was asked, across all prompt kinds
    pub fn times_asked(&self, prompt: &str) -> usize {
        self.events
            .iter()
            .filter(|e| match e {
                PromptEvent::Input(p) | PromptEvent::Secret(p) | PromptEvent::Confirm(p) => {
                    p == prompt
                }
                _ => false,
            })
            .count()
    }

    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }

    fn next(&mut self, prompt: &str) -> StarterResult<Answer> {
        self.script.pop_front().ok_or_else(|| {
            StarterError::Other(format!("No scripted answer left for prompt '{}'", prompt))
        })
    }
}

fn unexpected(prompt: &str, got: &Answer) -> StarterError {
    StarterError::Other(format!("Prompt '{}' got scripted {:?}", prompt, got))
}

impl Prompter for MockPrompter {
    fn input(&mut self, prompt: &str, default: &str) -> StarterResult<String> {
        self.events.push(PromptEvent::Input(prompt.to_string()));
        match self.next(prompt)? {
            Answer::Text(text) if text.is_empty() => Ok(default.to_string()),
            Answer::Text(text) => Ok(text),
            other => Err(unexpected(prompt, &other)),
        }
    }

    fn secret(&mut self, prompt: &str) -> StarterResult<String> {
        self.events.push(PromptEvent::Secret(prompt.to_string()));
        match self.next(prompt)? {
            Answer::Secret(text) => Ok(text),
            other => Err(unexpected(prompt, &other)),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> StarterResult<bool> {
        self.events.push(PromptEvent::Confirm(prompt.to_string()));
        match self.next(prompt)? {
            Answer::Confirm(yes) => Ok(yes),
            other => Err(unexpected(prompt, &other)),
        }
    }

    fn error(&mut self, message: &str) {
        self.events.push(PromptEvent::Error(message.to_string()));
    }

    fn warning(&mut self, message: &str) {
        self.events.push(PromptEvent::Warning(message.to_string()));
    }
}
