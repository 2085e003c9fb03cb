//! Yes/no confirmation.
//!
//! A single free-text answer is normalized and compared against a fixed
//! set of affirmatives in English and Russian. There is no retry: anything
//! else, including an empty line, is a "no".

use crate::error::Result;

use super::{Prompt, UserInterface};

/// Answers accepted as "yes" after trimming and lower-casing.
pub const AFFIRMATIVE_ANSWERS: [&str; 4] = ["y", "yes", "д", "да"];

/// Check whether an answer counts as "yes".
pub fn is_affirmative(answer: &str) -> bool {
    let normalized = answer.trim().to_lowercase();
    AFFIRMATIVE_ANSWERS.contains(&normalized.as_str())
}

/// Ask a yes/no question. Defaults to "no".
pub fn confirm(ui: &mut dyn UserInterface, key: &str, question: &str) -> Result<bool> {
    let answer = ui.prompt(&Prompt::new(key, &format!("{} [y/N]", question)))?;
    let confirmed = is_affirmative(&answer);
    tracing::debug!(key, confirmed, "confirmation answered");
    Ok(confirmed)
}
