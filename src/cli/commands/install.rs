//! Install command implementation.
//!
//! The `node-bootstrap install` command (also the default) resolves the
//! OS, makes sure Node.js and npm are present, then installs the project's
//! npm dependencies.

use std::path::{Path, PathBuf};

use crate::dependencies::{install_dependencies, DependencyOutcome};
use crate::error::Result;
use crate::platform::{choose_os, OsChoice, OsDetector, ResolvedOs};
use crate::provision::{ProvisionHost, ProvisionStrategy};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand<'a> {
    project_dir: PathBuf,
    os: Option<OsChoice>,
    host: &'a dyn ProvisionHost,
    detector: OsDetector,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    ///
    /// With `os` set the OS menu is skipped; confirmations are still asked.
    pub fn new(
        project_dir: &Path,
        os: Option<OsChoice>,
        host: &'a dyn ProvisionHost,
        detector: OsDetector,
    ) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            os,
            host,
            detector,
        }
    }

    fn resolve_os(&self, ui: &mut dyn UserInterface) -> Result<ResolvedOs> {
        match self.os {
            Some(choice) => Ok(ResolvedOs::from_flag(choice, &self.detector)),
            None => choose_os(ui, &self.detector),
        }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Node.js project bootstrap");

        let resolved = self.resolve_os(ui)?;
        ui.message(&format!("Selected OS: {}", resolved.family));

        let strategy = match ProvisionStrategy::for_family(resolved.family) {
            Some(strategy) if resolved.is_known() => strategy,
            _ => {
                ui.error("Could not detect the OS. Choose it manually and run again.");
                return Ok(CommandResult::failure(1));
            }
        };

        let outcome = strategy.provision(ui, self.host)?;
        tracing::debug!(?outcome, "provisioning finished");
        if !outcome.is_ready() {
            ui.error("Node.js/npm are not installed. Stopped.");
            return Ok(CommandResult::failure(1));
        }

        match install_dependencies(&self.project_dir, ui, self.host)? {
            DependencyOutcome::Installed => {
                ui.success("Done! You can now run: npm run start");
            }
            DependencyOutcome::ManifestMissing { path } => {
                tracing::debug!(path = %path.display(), "skipped dependency install");
            }
        }

        Ok(CommandResult::success())
    }
}
