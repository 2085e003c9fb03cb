//! Project dependency installation.
//!
//! Runs `npm install` in the project directory once the runtime is ready.
//! The directory is passed explicitly; the process working directory is
//! never changed.

use std::path::{Path, PathBuf};

use crate::error::{BootstrapError, Result};
use crate::provision::ProvisionHost;
use crate::shell::CommandLine;
use crate::ui::UserInterface;

/// The project manifest file name.
pub const MANIFEST_FILE: &str = "package.json";

/// Result of a dependency install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyOutcome {
    /// `npm install` completed.
    Installed,
    /// No manifest in the project directory; nothing was run.
    ManifestMissing { path: PathBuf },
}

/// Locate the manifest in `project_dir`.
///
/// Only a regular file counts; a directory named `package.json` is
/// reported as missing rather than handed to npm.
pub fn locate_manifest(project_dir: &Path) -> Result<PathBuf> {
    let path = project_dir.join(MANIFEST_FILE);
    if path.is_file() {
        Ok(path)
    } else {
        Err(BootstrapError::ManifestNotFound { path })
    }
}

/// The `npm install` command for `project_dir`.
pub fn npm_install(project_dir: &Path) -> CommandLine {
    CommandLine::new("npm").arg("install").in_dir(project_dir)
}

/// Install the project's npm dependencies.
///
/// Without a manifest this prints a hint and runs nothing. Otherwise it
/// runs exactly one `npm install`; a non-zero exit is an error.
pub fn install_dependencies(
    project_dir: &Path,
    ui: &mut dyn UserInterface,
    host: &dyn ProvisionHost,
) -> Result<DependencyOutcome> {
    match locate_manifest(project_dir) {
        Ok(manifest) => {
            tracing::debug!(manifest = %manifest.display(), "installing dependencies");
            host.run_checked(&npm_install(project_dir))?;
            Ok(DependencyOutcome::Installed)
        }
        Err(BootstrapError::ManifestNotFound { path }) => {
            ui.warning(&format!(
                "{} not found in {}. Make sure the runner is started from the project folder.",
                MANIFEST_FILE,
                project_dir.display()
            ));
            Ok(DependencyOutcome::ManifestMissing { path })
        }
        Err(e) => Err(e),
    }
}
