use dialoguer::{Confirm, Input};

use crate::error::Result;

/// Prompt for one free-text order. An empty line means "done ordering".
pub fn prompt_order_text() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("What would you like? (Enter to quit)")
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
