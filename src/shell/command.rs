//! External command execution.
//!
//! Commands are spawned directly (no intermediate shell) with a fixed
//! argument list. [`run`] echoes the command line and hands the console to
//! the child so package manager output and `sudo` password prompts stay
//! visible and answerable.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{BootstrapError, Result};

use super::path::which;

/// A program and its arguments, optionally bound to a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl CommandLine {
    /// Create a command line for `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the command in `dir` instead of the current directory.
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    /// Prepend a wrapper program such as `sudo`.
    ///
    /// The original program becomes the wrapper's first argument.
    pub fn prefixed(self, wrapper: &str) -> Self {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.program);
        args.extend(self.args);
        Self {
            program: wrapper.to_string(),
            args,
            cwd: self.cwd,
        }
    }

    /// The program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The arguments, without the program name.
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// The working directory, if one was set.
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// All tokens: program followed by arguments.
    pub fn tokens(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens().join(" "))
    }
}

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,

    /// Captured standard output. Empty when output was inherited.
    pub stdout: String,
}

impl CommandOutcome {
    /// Create a success outcome.
    pub fn success() -> Self {
        Self {
            exit_code: Some(0),
            success: true,
            stdout: String::new(),
        }
    }

    /// Create a failure outcome.
    pub fn failure(exit_code: Option<i32>) -> Self {
        Self {
            exit_code,
            success: false,
            stdout: String::new(),
        }
    }

    fn from_status(status: ExitStatus, stdout: String) -> Self {
        Self {
            exit_code: status.code(),
            success: status.success(),
            stdout,
        }
    }
}

/// Execute a command with the console attached.
///
/// Prints `> <command line>` first. With `check` set, a non-zero exit
/// becomes [`BootstrapError::CommandFailed`].
pub fn run(command: &CommandLine, check: bool) -> Result<CommandOutcome> {
    println!("> {}", command);
    tracing::debug!(command = %command, check, "running command");

    let status = build(command)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| BootstrapError::CommandSpawn {
            command: command.to_string(),
            source,
        })?;

    let outcome = CommandOutcome::from_status(status, String::new());
    tracing::debug!(command = %command, exit_code = ?outcome.exit_code, "command finished");

    if check && !outcome.success {
        return Err(BootstrapError::CommandFailed {
            command: command.to_string(),
            code: outcome.exit_code,
        });
    }

    Ok(outcome)
}

/// Execute a command silently and capture its standard output.
///
/// Never fails on a non-zero exit; callers inspect `success`.
pub fn capture(command: &CommandLine) -> Result<CommandOutcome> {
    let output = build(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| BootstrapError::CommandSpawn {
            command: command.to_string(),
            source,
        })?;

    Ok(CommandOutcome::from_status(
        output.status,
        String::from_utf8_lossy(&output.stdout).to_string(),
    ))
}

// Spawning through the resolved path lets Windows launch `.cmd` shims,
// which `Command::new("npm")` alone would not find.
fn build(command: &CommandLine) -> Command {
    let program = which(command.program()).unwrap_or_else(|| PathBuf::from(command.program()));

    let mut cmd = Command::new(program);
    cmd.args(command.arguments());
    if let Some(cwd) = command.cwd() {
        cmd.current_dir(cwd);
    }
    cmd
}
