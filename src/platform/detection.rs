//! Host operating system detection.
//!
//! Detection is a substring match over the host's system name, so it can
//! be exercised for any platform string without running on that platform.

use serde::Serialize;

/// Operating system family the provisioner knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Linux,
    Macos,
    Windows,
    Unknown,
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Linux => "linux",
            Self::Macos => "macos",
            Self::Windows => "windows",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Map a system name such as `Linux`, `Darwin` or `Windows_NT` to a family.
pub fn detect_from(system_name: &str) -> OsFamily {
    let name = system_name.to_lowercase();
    if name.contains("linux") {
        OsFamily::Linux
    } else if name.contains("darwin") {
        OsFamily::Macos
    } else if name.contains("windows") {
        OsFamily::Windows
    } else {
        OsFamily::Unknown
    }
}

/// Conventional kernel name for a Rust target OS.
///
/// `std::env::consts::OS` says `macos` where the kernel reports `Darwin`;
/// targets without a known kernel name pass through unchanged.
pub fn system_name_for(target_os: &str) -> &str {
    match target_os {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows",
        other => other,
    }
}

/// Detects the operating system family from a system name.
///
/// # Example
///
/// ```
/// use node_bootstrap::platform::{OsDetector, OsFamily};
///
/// let detector = OsDetector::with_system_name("Darwin");
/// assert_eq!(detector.detect(), OsFamily::Macos);
/// ```
#[derive(Debug, Clone)]
pub struct OsDetector {
    system_name: String,
}

impl OsDetector {
    /// Create a detector for the host this binary was built for.
    pub fn host() -> Self {
        Self::with_system_name(system_name_for(std::env::consts::OS))
    }

    /// Create a detector for an explicit system name (for testing).
    pub fn with_system_name(name: &str) -> Self {
        Self {
            system_name: name.to_string(),
        }
    }

    /// The system name detection is based on.
    pub fn system_name(&self) -> &str {
        &self.system_name
    }

    /// Detect the operating system family.
    pub fn detect(&self) -> OsFamily {
        detect_from(&self.system_name)
    }
}

impl Default for OsDetector {
    fn default() -> Self {
        Self::host()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_linux() {
        assert_eq!(detect_from("Linux"), OsFamily::Linux);
        assert_eq!(detect_from("GNU/Linux"), OsFamily::Linux);
    }

    #[test]
    fn detects_darwin_as_macos() {
        assert_eq!(detect_from("Darwin"), OsFamily::Macos);
    }

    #[test]
    fn detects_windows() {
        assert_eq!(detect_from("Windows"), OsFamily::Windows);
        assert_eq!(detect_from("Windows_NT"), OsFamily::Windows);
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert_eq!(detect_from("LINUX"), OsFamily::Linux);
        assert_eq!(detect_from("darwin"), OsFamily::Macos);
    }

    #[test]
    fn unrecognized_platform_is_unknown() {
        assert_eq!(detect_from("FreeBSD"), OsFamily::Unknown);
        assert_eq!(detect_from("SunOS"), OsFamily::Unknown);
        assert_eq!(detect_from(""), OsFamily::Unknown);
    }

    #[test]
    fn macos_target_is_not_matched_by_its_rust_name() {
        // Only the kernel name is recognized; `system_name_for` bridges the gap.
        assert_eq!(detect_from("macos"), OsFamily::Unknown);
        assert_eq!(detect_from(system_name_for("macos")), OsFamily::Macos);
    }

    #[test]
    fn system_name_for_passes_unknown_targets_through() {
        assert_eq!(system_name_for("freebsd"), "freebsd");
        assert_eq!(detect_from(system_name_for("freebsd")), OsFamily::Unknown);
    }

    #[test]
    fn host_detector_matches_build_target() {
        let detected = OsDetector::host().detect();
        if cfg!(target_os = "linux") {
            assert_eq!(detected, OsFamily::Linux);
        } else if cfg!(target_os = "macos") {
            assert_eq!(detected, OsFamily::Macos);
        } else if cfg!(target_os = "windows") {
            assert_eq!(detected, OsFamily::Windows);
        }
    }

    #[test]
    fn family_displays_lowercase() {
        assert_eq!(OsFamily::Linux.to_string(), "linux");
        assert_eq!(OsFamily::Macos.to_string(), "macos");
        assert_eq!(OsFamily::Windows.to_string(), "windows");
        assert_eq!(OsFamily::Unknown.to_string(), "unknown");
    }

    #[test]
    fn family_serializes_lowercase() {
        let json = serde_json::to_string(&OsFamily::Macos).unwrap();
        assert_eq!(json, "\"macos\"");
    }
}
