//! Operating system detection and resolution.
//!
//! Determines which OS family to provision for. The priority chain is:
//!
//! 1. Explicit `--os` flag
//! 2. The operator's answer to the OS menu
//! 3. Auto-detection from the host system name

pub mod detection;
pub mod resolver;

pub use detection::{detect_from, OsDetector, OsFamily};
pub use resolver::{choose_os, OsChoice, OsSource, ResolvedOs};
