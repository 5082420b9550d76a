//! Interactive input contract
//!
//! The terminal implementation lives in `tui::service`; tests script answers.

use crate::error::Result;

/// One selectable entry of a choice prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub hint: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            hint: String::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }
}

/// Collects answers from the user
pub trait PromptService: Send + Sync {
    /// Ask for free text, re-prompting until the trimmed answer is non-empty
    fn ask_non_empty_text(&self, message: &str) -> Result<String>;

    /// Ask for exactly one of `choices`; returns the chosen value
    fn ask_single_choice(&self, message: &str, choices: &[Choice]) -> Result<String>;

    /// Ask for any subset of `choices`. The returned order is the selection
    /// order callers act on. When `required`, at least one must be chosen.
    fn ask_multi_choice(
        &self,
        message: &str,
        choices: &[Choice],
        required: bool,
    ) -> Result<Vec<String>>;
}
