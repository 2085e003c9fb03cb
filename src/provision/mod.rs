//! Runtime provisioning.
//!
//! Ensures Node.js and npm are installed and on the search path,
//! installing them through the OS's native package manager when they are
//! missing.
//!
//! # Modules
//!
//! - [`candidates`] - Package managers per OS family, in priority order
//! - [`host`] - The [`ProvisionHost`] seam and the real [`SystemHost`]
//! - [`mock`] - A scripted [`MockHost`] for tests
//! - [`strategy`] - The per-OS [`ProvisionStrategy`]
//!
//! # Example
//!
//! ```
//! use node_bootstrap::platform::OsFamily;
//! use node_bootstrap::provision::{MockHost, ProvisionOutcome, ProvisionStrategy};
//! use node_bootstrap::ui::MockUI;
//!
//! let host = MockHost::with_programs(&["node", "npm"]);
//! let mut ui = MockUI::new();
//! let strategy = ProvisionStrategy::for_family(OsFamily::Linux).unwrap();
//!
//! let outcome = strategy.provision(&mut ui, &host).unwrap();
//! assert_eq!(outcome, ProvisionOutcome::AlreadyInstalled);
//! ```

pub mod candidates;
pub mod host;
pub mod mock;
pub mod strategy;

pub use candidates::{candidates_for, first_available, InstallStep, PackageManagerCandidate};
pub use host::{ProvisionHost, SystemHost};
pub use mock::MockHost;
pub use strategy::{ProvisionStrategy, INSTALL_PROMPT_KEY};

/// Executables that must all be on the search path.
pub const RUNTIME_EXECUTABLES: [&str; 2] = ["node", "npm"];

/// Check whether `node` and `npm` are both on the search path.
pub fn runtime_available(host: &dyn ProvisionHost) -> bool {
    RUNTIME_EXECUTABLES.iter().all(|exe| host.is_on_path(exe))
}

/// Result of a provisioning attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// `node` and `npm` were already on the search path.
    AlreadyInstalled,
    /// Installed through the named package manager.
    Installed { manager: &'static str },
    /// The operator declined the install.
    Declined { manager: &'static str },
    /// No supported package manager is present.
    NoPackageManager,
    /// The install ran but `node`/`npm` are still not on the search path.
    NotOnPathAfterInstall { manager: &'static str },
}

impl ProvisionOutcome {
    /// Whether the runtime is usable.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::AlreadyInstalled | Self::Installed { .. })
    }
}
