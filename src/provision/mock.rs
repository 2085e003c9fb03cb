//! Scripted host for testing.
//!
//! `MockHost` implements [`ProvisionHost`] without touching the machine:
//! programs "exist" when listed, commands are recorded instead of run, and
//! a command can be scripted to make programs appear or to fail.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::error::{BootstrapError, Result};
use crate::shell::{CommandLine, CommandOutcome};

use super::host::ProvisionHost;

/// Scripted [`ProvisionHost`] for testing.
#[derive(Debug)]
pub struct MockHost {
    on_path: RefCell<HashSet<String>>,
    installs: HashMap<String, Vec<String>>,
    failures: HashMap<String, i32>,
    unlaunchable: HashSet<String>,
    captured_output: HashMap<String, String>,
    commands: RefCell<Vec<CommandLine>>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    /// An empty host: nothing on the search path.
    pub fn new() -> Self {
        Self {
            on_path: RefCell::new(HashSet::new()),
            installs: HashMap::new(),
            failures: HashMap::new(),
            unlaunchable: HashSet::new(),
            captured_output: HashMap::new(),
            commands: RefCell::new(Vec::new()),
        }
    }

    /// A host with `programs` already on the search path.
    pub fn with_programs(programs: &[&str]) -> Self {
        let host = Self::new();
        for program in programs {
            host.add_program(program);
        }
        host
    }

    /// Put a program on the search path.
    pub fn add_program(&self, program: &str) {
        self.on_path.borrow_mut().insert(program.to_string());
    }

    /// When `command_line` runs, `programs` appear on the search path.
    pub fn installs_on(&mut self, command_line: &str, programs: &[&str]) {
        self.installs.insert(
            command_line.to_string(),
            programs.iter().map(|p| p.to_string()).collect(),
        );
    }

    /// When `command_line` runs, it exits with `code`.
    pub fn fail_on(&mut self, command_line: &str, code: i32) {
        self.failures.insert(command_line.to_string(), code);
    }

    /// When `command_line` runs or is captured, it cannot be started.
    pub fn fail_to_spawn(&mut self, command_line: &str) {
        self.unlaunchable.insert(command_line.to_string());
    }

    fn spawn_error(&self, line: &str) -> Option<BootstrapError> {
        self.unlaunchable
            .contains(line)
            .then(|| BootstrapError::CommandSpawn {
                command: line.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "not executable"),
            })
    }

    /// Standard output returned when `command_line` is captured.
    pub fn set_captured_output(&mut self, command_line: &str, stdout: &str) {
        self.captured_output
            .insert(command_line.to_string(), stdout.to_string());
    }

    /// Commands run so far, in order. Captured commands are not included.
    pub fn commands_run(&self) -> Vec<CommandLine> {
        self.commands.borrow().clone()
    }

    /// Commands run so far, as space-joined strings.
    pub fn command_strings(&self) -> Vec<String> {
        self.commands.borrow().iter().map(|c| c.to_string()).collect()
    }
}

impl ProvisionHost for MockHost {
    fn is_on_path(&self, program: &str) -> bool {
        self.on_path.borrow().contains(program)
    }

    fn run_checked(&self, command: &CommandLine) -> Result<CommandOutcome> {
        self.commands.borrow_mut().push(command.clone());
        let line = command.to_string();

        if let Some(err) = self.spawn_error(&line) {
            return Err(err);
        }

        if let Some(&code) = self.failures.get(&line) {
            return Err(BootstrapError::CommandFailed {
                command: line,
                code: Some(code),
            });
        }

        if let Some(programs) = self.installs.get(&line) {
            for program in programs {
                self.add_program(program);
            }
        }

        Ok(CommandOutcome::success())
    }

    fn capture(&self, command: &CommandLine) -> Result<CommandOutcome> {
        let line = command.to_string();
        if let Some(err) = self.spawn_error(&line) {
            return Err(err);
        }

        match self.captured_output.get(&line) {
            Some(stdout) => Ok(CommandOutcome {
                stdout: stdout.clone(),
                ..CommandOutcome::success()
            }),
            None => Ok(CommandOutcome::failure(Some(1))),
        }
    }
}
