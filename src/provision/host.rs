//! Host operations the provisioner depends on.

use crate::error::Result;
use crate::shell::{self, CommandLine, CommandOutcome};

/// Mockable access to the machine being provisioned.
pub trait ProvisionHost {
    /// Check whether an executable is on the search path.
    fn is_on_path(&self, program: &str) -> bool;

    /// Run a command with the console attached.
    ///
    /// A non-zero exit is an error ([`BootstrapError::CommandFailed`](crate::BootstrapError::CommandFailed)).
    fn run_checked(&self, command: &CommandLine) -> Result<CommandOutcome>;

    /// Run a command silently, capturing its output.
    fn capture(&self, command: &CommandLine) -> Result<CommandOutcome>;
}

/// The real machine: `PATH` lookup and spawned processes.
#[derive(Debug, Clone, Default)]
pub struct SystemHost;

impl SystemHost {
    /// Create a host.
    pub fn new() -> Self {
        Self
    }
}

impl ProvisionHost for SystemHost {
    fn is_on_path(&self, program: &str) -> bool {
        shell::is_on_path(program)
    }

    fn run_checked(&self, command: &CommandLine) -> Result<CommandOutcome> {
        shell::run(command, true)
    }

    fn capture(&self, command: &CommandLine) -> Result<CommandOutcome> {
        shell::capture(command)
    }
}
