//! Console user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for the real console
//! - [`MockUI`] for tests
//! - [`confirm`] for yes/no questions
//!
//! # Example
//!
//! ```
//! use node_bootstrap::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("node-bootstrap");
//! ui.success("Dependencies installed");
//! assert!(ui.has_success("installed"));
//! ```

pub mod confirm;
pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use confirm::{confirm, is_affirmative, AFFIRMATIVE_ANSWERS};
pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, BootstrapTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a prompt and read one line of input.
    ///
    /// The line is returned as typed (without the trailing newline); an
    /// empty string means the operator just pressed enter or input ended.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;
}

/// A prompt to show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Unique key for the prompt (used for lookup in tests).
    pub key: String,
    /// The question to display.
    pub question: String,
}

impl Prompt {
    /// Create a prompt.
    pub fn new(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
        }
    }
}
