//! node-bootstrap - Get a Node.js project running on a fresh machine.
//!
//! Resolves the operating system, installs Node.js and npm through the
//! native package manager when they are missing, then runs `npm install`
//! in the project directory.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`dependencies`] - `package.json` lookup and `npm install`
//! - [`error`] - Error types and result aliases
//! - [`platform`] - OS detection and the OS menu
//! - [`provision`] - Package manager candidates and runtime provisioning
//! - [`shell`] - Command execution and `PATH` lookup
//! - [`ui`] - Console output and prompts
//!
//! # Example
//!
//! ```
//! use node_bootstrap::platform::{OsDetector, OsFamily, ResolvedOs};
//!
//! // An unrecognized menu answer falls back to auto-detection.
//! let detector = OsDetector::with_system_name("Windows_NT");
//! let resolved = ResolvedOs::from_menu_answer("9", &detector);
//! assert_eq!(resolved.family, OsFamily::Windows);
//! ```
//!
//! For end-to-end runs against a scripted host, see the integration tests.

pub mod cli;
pub mod dependencies;
pub mod error;
pub mod platform;
pub mod provision;
pub mod shell;
pub mod ui;

pub use error::{BootstrapError, Result};
