//! Native package manager candidates.
//!
//! Each OS family has a fixed list, in priority order. The provisioner
//! uses the first candidate whose binary is on the search path and never
//! falls back to a later one in the same run.

use crate::platform::OsFamily;
use crate::shell::CommandLine;

/// Wrapper prepended to privileged install commands.
pub const PRIVILEGE_WRAPPER: &str = "sudo";

/// One command of an install sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallStep {
    /// Program to run.
    pub program: &'static str,
    /// Fixed argument list.
    pub args: &'static [&'static str],
    /// Whether the command needs root (gets [`PRIVILEGE_WRAPPER`]).
    pub privileged: bool,
}

impl InstallStep {
    /// Build the command line, prefixing `sudo` for privileged steps.
    pub fn command_line(&self) -> CommandLine {
        let command = CommandLine::new(self.program).args(self.args.iter().copied());
        if self.privileged {
            command.prefixed(PRIVILEGE_WRAPPER)
        } else {
            command
        }
    }
}

/// A native package manager able to install Node.js.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageManagerCandidate {
    /// Executable looked up on the search path.
    pub binary: &'static str,
    /// Confirmation question asked before installing.
    pub question: &'static str,
    /// Commands run in order after confirmation.
    pub steps: &'static [InstallStep],
}

const fn privileged(program: &'static str, args: &'static [&'static str]) -> InstallStep {
    InstallStep {
        program,
        args,
        privileged: true,
    }
}

const fn unprivileged(program: &'static str, args: &'static [&'static str]) -> InstallStep {
    InstallStep {
        program,
        args,
        privileged: false,
    }
}

const LINUX_QUESTION: &str = "Install Node.js and npm?";

/// Linux package managers: Debian, Fedora, Arch, SUSE, Alpine families.
pub const LINUX_CANDIDATES: &[PackageManagerCandidate] = &[
    PackageManagerCandidate {
        binary: "apt-get",
        question: LINUX_QUESTION,
        steps: &[
            privileged("apt-get", &["update"]),
            privileged("apt-get", &["install", "-y", "nodejs", "npm"]),
        ],
    },
    PackageManagerCandidate {
        binary: "dnf",
        question: LINUX_QUESTION,
        steps: &[privileged("dnf", &["install", "-y", "nodejs", "npm"])],
    },
    PackageManagerCandidate {
        binary: "pacman",
        question: LINUX_QUESTION,
        steps: &[privileged("pacman", &["-Sy", "--noconfirm", "nodejs", "npm"])],
    },
    PackageManagerCandidate {
        binary: "zypper",
        question: LINUX_QUESTION,
        steps: &[privileged("zypper", &["install", "-y", "nodejs", "npm"])],
    },
    PackageManagerCandidate {
        binary: "apk",
        question: LINUX_QUESTION,
        steps: &[privileged("apk", &["add", "nodejs", "npm"])],
    },
];

/// macOS: Homebrew only.
pub const MACOS_CANDIDATES: &[PackageManagerCandidate] = &[PackageManagerCandidate {
    binary: "brew",
    question: "Install Node.js via Homebrew?",
    steps: &[unprivileged("brew", &["install", "node"])],
}];

/// Windows: winget first, then Chocolatey. Both install the LTS release.
pub const WINDOWS_CANDIDATES: &[PackageManagerCandidate] = &[
    PackageManagerCandidate {
        binary: "winget",
        question: "Install Node.js (LTS) via winget?",
        steps: &[unprivileged("winget", &["install", "-e", "--id", "OpenJS.NodeJS.LTS"])],
    },
    PackageManagerCandidate {
        binary: "choco",
        question: "Install Node.js (LTS) via Chocolatey?",
        steps: &[unprivileged("choco", &["install", "-y", "nodejs-lts"])],
    },
];

/// The candidate list for an OS family. Empty for [`OsFamily::Unknown`].
pub fn candidates_for(family: OsFamily) -> &'static [PackageManagerCandidate] {
    match family {
        OsFamily::Linux => LINUX_CANDIDATES,
        OsFamily::Macos => MACOS_CANDIDATES,
        OsFamily::Windows => WINDOWS_CANDIDATES,
        OsFamily::Unknown => &[],
    }
}

/// The first candidate whose binary `is_on_path` reports present.
pub fn first_available<'a>(
    candidates: &'a [PackageManagerCandidate],
    is_on_path: impl Fn(&str) -> bool,
) -> Option<&'a PackageManagerCandidate> {
    candidates.iter().find(|c| is_on_path(c.binary))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binaries(candidates: &[PackageManagerCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.binary).collect()
    }

    #[test]
    fn linux_priority_order() {
        assert_eq!(
            binaries(LINUX_CANDIDATES),
            vec!["apt-get", "dnf", "pacman", "zypper", "apk"]
        );
    }

    #[test]
    fn windows_priority_order() {
        assert_eq!(binaries(WINDOWS_CANDIDATES), vec!["winget", "choco"]);
    }

    #[test]
    fn macos_uses_homebrew_only() {
        assert_eq!(binaries(MACOS_CANDIDATES), vec!["brew"]);
    }

    #[test]
    fn unknown_has_no_candidates() {
        assert!(candidates_for(OsFamily::Unknown).is_empty());
    }

    #[test]
    fn only_apt_has_a_refresh_step() {
        for candidate in LINUX_CANDIDATES {
            let expected = if candidate.binary == "apt-get" { 2 } else { 1 };
            assert_eq!(candidate.steps.len(), expected, "{}", candidate.binary);
        }
        let apt = &LINUX_CANDIDATES[0];
        assert_eq!(apt.steps[0].args, &["update"]);
    }

    #[test]
    fn linux_steps_are_wrapped_with_sudo() {
        let step = LINUX_CANDIDATES[1].steps[0];
        assert_eq!(
            step.command_line().to_string(),
            "sudo dnf install -y nodejs npm"
        );
    }

    #[test]
    fn every_linux_step_is_privileged() {
        for candidate in LINUX_CANDIDATES {
            for step in candidate.steps {
                assert_eq!(step.command_line().program(), "sudo", "{}", candidate.binary);
            }
        }
        let apk = LINUX_CANDIDATES[4].steps[0];
        assert_eq!(apk.command_line().to_string(), "sudo apk add nodejs npm");
    }

    #[test]
    fn unprivileged_steps_are_not_wrapped() {
        let step = MACOS_CANDIDATES[0].steps[0];
        assert_eq!(step.command_line().to_string(), "brew install node");
    }

    #[test]
    fn windows_installs_lts() {
        assert_eq!(
            WINDOWS_CANDIDATES[0].steps[0].command_line().to_string(),
            "winget install -e --id OpenJS.NodeJS.LTS"
        );
        assert_eq!(
            WINDOWS_CANDIDATES[1].steps[0].command_line().to_string(),
            "choco install -y nodejs-lts"
        );
    }

    #[test]
    fn first_available_respects_order() {
        let found = first_available(LINUX_CANDIDATES, |b| b == "apk" || b == "dnf");
        assert_eq!(found.map(|c| c.binary), Some("dnf"));
    }

    #[test]
    fn first_available_none_when_nothing_present() {
        assert!(first_available(WINDOWS_CANDIDATES, |_| false).is_none());
    }
}
