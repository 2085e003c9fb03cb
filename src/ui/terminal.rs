//! Console UI.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::io::{BufRead, Write};

use crate::error::{BootstrapError, Result};

use super::{should_use_colors, BootstrapTheme, OutputMode, Prompt, UserInterface};

/// Console UI implementation.
///
/// Prompts use `dialoguer` when a terminal is attached and fall back to
/// reading a plain line from standard input when input is piped.
pub struct TerminalUI {
    term: Term,
    theme: BootstrapTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            BootstrapTheme::new()
        } else {
            BootstrapTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

/// Create the console UI.
pub fn create_ui(mode: OutputMode) -> Box<dyn super::UserInterface> {
    Box::new(TerminalUI::new(mode))
}

/// Convert dialoguer errors to BootstrapError.
fn map_dialoguer_err(e: dialoguer::Error) -> BootstrapError {
    BootstrapError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Read one line, without its line terminator. End of input reads as empty.
pub fn read_answer(reader: &mut dyn BufRead) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        Term::stderr()
            .write_line(&self.theme.format_error(msg))
            .ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        if self.term.is_term() {
            return Input::<String>::with_theme(&prompt_theme())
                .with_prompt(&prompt.question)
                .allow_empty(true)
                .interact_on(&self.term)
                .map_err(map_dialoguer_err);
        }

        write!(self.term, "{} ", prompt.question).ok();
        self.term.flush().ok();
        read_answer(&mut std::io::stdin().lock())
    }
}
