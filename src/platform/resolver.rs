//! Operating system resolution.
//!
//! Resolves the target OS using:
//! 1. Explicit `--os` flag (skips the menu)
//! 2. The operator's menu answer (`2`, `3` or `4`)
//! 3. Auto-detection for anything else, including `1` and empty input

use serde::Serialize;

use crate::error::Result;
use crate::ui::{Prompt, UserInterface};

use super::detection::{OsDetector, OsFamily};

/// Menu shown when asking for the operator's choice.
pub const OS_MENU: [&str; 6] = [
    "Select the OS to install dependencies for:",
    "1) Auto-detect",
    "2) Linux",
    "3) macOS",
    "4) Windows",
    "Choice",
];

/// An operating system choice, before auto-detection is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OsChoice {
    /// Detect from the host platform.
    Auto,
    Linux,
    Macos,
    Windows,
}

impl OsChoice {
    /// Interpret a menu answer. Anything but an exact OS code means auto.
    pub fn from_menu_code(answer: &str) -> Self {
        match answer.trim() {
            "2" => Self::Linux,
            "3" => Self::Macos,
            "4" => Self::Windows,
            _ => Self::Auto,
        }
    }

    /// The family this choice names, or `None` for auto-detection.
    pub fn family(self) -> Option<OsFamily> {
        match self {
            Self::Auto => None,
            Self::Linux => Some(OsFamily::Linux),
            Self::Macos => Some(OsFamily::Macos),
            Self::Windows => Some(OsFamily::Windows),
        }
    }
}

/// How the operating system was determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "system_name")]
pub enum OsSource {
    /// Explicitly set via `--os` flag.
    Flag,
    /// Picked from the menu.
    Selected,
    /// Detected from the named host system.
    AutoDetected(String),
}

impl std::fmt::Display for OsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--os flag"),
            Self::Selected => write!(f, "selected"),
            Self::AutoDetected(name) => write!(f, "detected from '{}'", name),
        }
    }
}

/// A resolved operating system with how it was determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedOs {
    /// The operating system family.
    pub family: OsFamily,
    /// How this family was determined.
    pub source: OsSource,
}

impl ResolvedOs {
    /// Resolve a choice, falling back to detection for [`OsChoice::Auto`].
    ///
    /// `explicit_source` records where a non-auto choice came from.
    pub fn resolve(choice: OsChoice, explicit_source: OsSource, detector: &OsDetector) -> Self {
        match choice.family() {
            Some(family) => Self {
                family,
                source: explicit_source,
            },
            None => Self {
                family: detector.detect(),
                source: OsSource::AutoDetected(detector.system_name().to_string()),
            },
        }
    }

    /// Resolve from the `--os` flag.
    pub fn from_flag(choice: OsChoice, detector: &OsDetector) -> Self {
        Self::resolve(choice, OsSource::Flag, detector)
    }

    /// Resolve from a menu answer.
    ///
    /// # Example
    ///
    /// ```
    /// use node_bootstrap::platform::{OsDetector, OsFamily, ResolvedOs};
    ///
    /// let detector = OsDetector::with_system_name("Darwin");
    /// assert_eq!(ResolvedOs::from_menu_answer("2", &detector).family, OsFamily::Linux);
    /// assert_eq!(ResolvedOs::from_menu_answer("1", &detector).family, OsFamily::Macos);
    /// ```
    pub fn from_menu_answer(answer: &str, detector: &OsDetector) -> Self {
        Self::resolve(
            OsChoice::from_menu_code(answer),
            OsSource::Selected,
            detector,
        )
    }

    /// Whether the family is usable for provisioning.
    pub fn is_known(&self) -> bool {
        self.family != OsFamily::Unknown
    }
}

/// Show the OS menu, read one answer and resolve it.
pub fn choose_os(ui: &mut dyn UserInterface, detector: &OsDetector) -> Result<ResolvedOs> {
    let answer = ui.prompt(&Prompt::new("os", &OS_MENU.join("\n")))?;
    let resolved = ResolvedOs::from_menu_answer(&answer, detector);
    tracing::debug!(answer = %answer.trim(), family = %resolved.family, source = %resolved.source, "resolved OS");
    Ok(resolved)
}
