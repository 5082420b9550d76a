//! cliclack-backed prompt service

use crate::error::{Error, Result};
use crate::prompt::{Choice, PromptService};

/// Prompts the user in the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct CliclackPrompts;

impl PromptService for CliclackPrompts {
    fn ask_non_empty_text(&self, message: &str) -> Result<String> {
        let input: String = cliclack::input(message)
            .validate(|input: &String| {
                if input.trim().is_empty() {
                    Err("Please enter a value.")
                } else {
                    Ok(())
                }
            })
            .interact()
            .map_err(Error::Prompt)?;

        Ok(input.trim().to_string())
    }

    fn ask_single_choice(&self, message: &str, choices: &[Choice]) -> Result<String> {
        let mut select = cliclack::select(message);
        for choice in choices {
            select = select.item(choice.value.clone(), &choice.label, &choice.hint);
        }
        select.interact().map_err(Error::Prompt)
    }

    fn ask_multi_choice(
        &self,
        message: &str,
        choices: &[Choice],
        required: bool,
    ) -> Result<Vec<String>> {
        let mut multi = cliclack::multiselect(message);
        for choice in choices {
            multi = multi.item(choice.value.clone(), &choice.label, &choice.hint);
        }
        multi.required(required).interact().map_err(Error::Prompt)
    }
}
