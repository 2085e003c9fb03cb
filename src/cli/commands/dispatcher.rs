//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::platform::OsDetector;
use crate::provision::ProvisionHost;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    project_dir: PathBuf,
    host: &'a dyn ProvisionHost,
    detector: OsDetector,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a dispatcher for `project_dir` acting on `host`.
    pub fn new(project_dir: PathBuf, host: &'a dyn ProvisionHost) -> Self {
        Self {
            project_dir,
            host,
            detector: OsDetector::host(),
        }
    }

    /// Use a specific OS detector instead of the host's.
    pub fn with_detector(mut self, detector: OsDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means `install`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Install) | None => {
                let cmd = super::install::InstallCommand::new(
                    &self.project_dir,
                    cli.os,
                    self.host,
                    self.detector.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Status(args)) => {
                let cmd = super::status::StatusCommand::new(
                    &self.project_dir,
                    cli.os,
                    args.clone(),
                    self.host,
                    self.detector.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provision::MockHost;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn no_subcommand_runs_install() {
        let temp = TempDir::new().unwrap();
        let host = MockHost::with_programs(&["node", "npm"]);
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), &host)
            .with_detector(OsDetector::with_system_name("Linux"));
        let cli = Cli::parse_from(["node-bootstrap"]);
        let mut ui = MockUI::new();
        ui.set_prompt_response("os", "1");

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Selected OS: linux"));
    }

    #[test]
    fn status_never_prompts() {
        let temp = TempDir::new().unwrap();
        let host = MockHost::new();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), &host)
            .with_detector(OsDetector::with_system_name("Linux"));
        let cli = Cli::parse_from(["node-bootstrap", "status"]);
        let mut ui = MockUI::new();

        dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(ui.prompts_shown().is_empty());
        assert!(host.commands_run().is_empty());
    }
}
