//! Status command implementation.
//!
//! The `node-bootstrap status` command reports what `install` would find
//! without prompting or changing anything.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::cli::args::StatusArgs;
use crate::dependencies::locate_manifest;
use crate::error::{BootstrapError, Result};
use crate::platform::{OsChoice, OsDetector, ResolvedOs};
use crate::provision::{candidates_for, first_available, runtime_available, ProvisionHost};
use crate::shell::CommandLine;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Matches the first dotted version number in `--version` output.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"v?(\d+\.\d+(?:\.\d+)?)").expect("VERSION_REGEX must compile")
});

/// Extract a version number such as `20.11.1` from tool output.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_REGEX
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// One runtime executable.
#[derive(Debug, Clone, Serialize)]
pub struct ToolStatus {
    pub name: &'static str,
    pub present: bool,
    pub version: Option<String>,
}

/// The project manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestStatus {
    pub path: PathBuf,
    pub present: bool,
}

/// Everything `status` reports.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub os: ResolvedOs,
    pub node: ToolStatus,
    pub npm: ToolStatus,
    /// The package manager `install` would use, if any.
    pub package_manager: Option<&'static str>,
    pub manifest: ManifestStatus,
    /// Runtime and manifest are both present.
    pub ready: bool,
}

/// The status command implementation.
pub struct StatusCommand<'a> {
    project_dir: PathBuf,
    os: Option<OsChoice>,
    args: StatusArgs,
    host: &'a dyn ProvisionHost,
    detector: OsDetector,
}

impl<'a> StatusCommand<'a> {
    /// Create a new status command.
    pub fn new(
        project_dir: &Path,
        os: Option<OsChoice>,
        args: StatusArgs,
        host: &'a dyn ProvisionHost,
        detector: OsDetector,
    ) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            os,
            args,
            host,
            detector,
        }
    }

    fn tool_status(&self, name: &'static str) -> Result<ToolStatus> {
        if !self.host.is_on_path(name) {
            return Ok(ToolStatus {
                name,
                present: false,
                version: None,
            });
        }

        // Present but not launchable still counts as present.
        let version = match self.host.capture(&CommandLine::new(name).arg("--version")) {
            Ok(outcome) if outcome.success => extract_version(&outcome.stdout),
            Ok(_) => None,
            Err(BootstrapError::CommandSpawn { command, source }) => {
                tracing::debug!(%command, error = %source, "could not query version");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(ToolStatus {
            name,
            present: true,
            version,
        })
    }

    /// Gather the report.
    pub fn report(&self) -> Result<StatusReport> {
        let os = ResolvedOs::from_flag(self.os.unwrap_or(OsChoice::Auto), &self.detector);
        let package_manager =
            first_available(candidates_for(os.family), |b| self.host.is_on_path(b))
                .map(|c| c.binary);

        let manifest = match locate_manifest(&self.project_dir) {
            Ok(path) => ManifestStatus {
                path,
                present: true,
            },
            Err(BootstrapError::ManifestNotFound { path }) => ManifestStatus {
                path,
                present: false,
            },
            Err(e) => return Err(e),
        };

        let ready = runtime_available(self.host) && manifest.present;

        Ok(StatusReport {
            node: self.tool_status("node")?,
            npm: self.tool_status("npm")?,
            os,
            package_manager,
            manifest,
            ready,
        })
    }
}

fn describe_tool(tool: &ToolStatus) -> String {
    match (tool.present, &tool.version) {
        (true, Some(version)) => format!("{} {}", tool.name, version),
        (true, None) => format!("{} (version unknown)", tool.name),
        (false, _) => format!("{} not found", tool.name),
    }
}

impl Command for StatusCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.report()?;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| BootstrapError::Other(e.into()))?;
            ui.message(&json);
        } else {
            ui.show_header("Node.js project bootstrap - Status");
            ui.message(&format!("OS: {} ({})", report.os.family, report.os.source));

            for tool in [&report.node, &report.npm] {
                if tool.present {
                    ui.success(&describe_tool(tool));
                } else {
                    ui.warning(&describe_tool(tool));
                }
            }

            match report.package_manager {
                Some(manager) => ui.message(&format!("Package manager: {}", manager)),
                None => ui.message("Package manager: none found"),
            }

            let manifest = report.manifest.path.display();
            if report.manifest.present {
                ui.success(&format!("Manifest: {}", manifest));
            } else {
                ui.warning(&format!("Manifest: {} not found", manifest));
            }
        }

        if report.ready {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
