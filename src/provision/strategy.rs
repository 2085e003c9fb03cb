//! Per-OS provisioning strategies.

use crate::error::Result;
use crate::platform::OsFamily;
use crate::ui::{confirm, UserInterface};

use super::candidates::{candidates_for, first_available, PackageManagerCandidate};
use super::host::ProvisionHost;
use super::{runtime_available, ProvisionOutcome};

/// Prompt key for the install confirmation.
pub const INSTALL_PROMPT_KEY: &str = "install_node";

/// How to provision the runtime on one OS family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionStrategy {
    /// The OS family this strategy serves.
    pub family: OsFamily,
    /// Package managers to try, in priority order.
    pub candidates: &'static [PackageManagerCandidate],
    /// Print the package manager that was found before asking.
    pub announce_manager: bool,
    /// Printed when no candidate is present.
    pub manual_install_hint: &'static [&'static str],
}

impl ProvisionStrategy {
    /// The strategy for `family`, or `None` for [`OsFamily::Unknown`].
    pub fn for_family(family: OsFamily) -> Option<Self> {
        let manual_install_hint: &'static [&'static str] = match family {
            OsFamily::Linux => &[
                "No package manager found to install Node.js automatically.",
                "Install Node.js and npm manually, then run the bootstrap again.",
            ],
            OsFamily::Macos => &["Homebrew not found. Install Homebrew and run again."],
            OsFamily::Windows => {
                &["winget/choco not found. Install Node.js manually and run again."]
            }
            OsFamily::Unknown => return None,
        };

        Some(Self {
            family,
            candidates: candidates_for(family),
            announce_manager: family == OsFamily::Linux,
            manual_install_hint,
        })
    }

    /// Make sure `node` and `npm` are available, installing them if needed.
    ///
    /// Declining, a missing package manager, or a runtime that is still
    /// missing after the install are returned as outcomes. Only a failing
    /// install command is an error.
    pub fn provision(
        &self,
        ui: &mut dyn UserInterface,
        host: &dyn ProvisionHost,
    ) -> Result<ProvisionOutcome> {
        if runtime_available(host) {
            tracing::debug!(family = %self.family, "runtime already available");
            return Ok(ProvisionOutcome::AlreadyInstalled);
        }

        let Some(candidate) = first_available(self.candidates, |b| host.is_on_path(b)) else {
            for line in self.manual_install_hint {
                ui.warning(line);
            }
            return Ok(ProvisionOutcome::NoPackageManager);
        };
        tracing::info!(manager = candidate.binary, "using package manager");

        if self.announce_manager {
            ui.message(&format!("Found package manager: {}", candidate.binary));
        }

        if !confirm(ui, INSTALL_PROMPT_KEY, candidate.question)? {
            return Ok(ProvisionOutcome::Declined {
                manager: candidate.binary,
            });
        }

        for step in candidate.steps {
            host.run_checked(&step.command_line())?;
        }

        if runtime_available(host) {
            Ok(ProvisionOutcome::Installed {
                manager: candidate.binary,
            })
        } else {
            Ok(ProvisionOutcome::NotOnPathAfterInstall {
                manager: candidate.binary,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provision::MockHost;
    use crate::ui::MockUI;
    use crate::BootstrapError;

    fn strategy(family: OsFamily) -> ProvisionStrategy {
        ProvisionStrategy::for_family(family).unwrap()
    }

    fn confirming_ui() -> MockUI {
        let mut ui = MockUI::new();
        ui.set_prompt_response(INSTALL_PROMPT_KEY, "y");
        ui
    }

    #[test]
    fn unknown_has_no_strategy() {
        assert!(ProvisionStrategy::for_family(OsFamily::Unknown).is_none());
    }

    #[test]
    fn runtime_present_is_a_no_op_for_every_family() {
        for family in [OsFamily::Linux, OsFamily::Macos, OsFamily::Windows] {
            let host = MockHost::with_programs(&["node", "npm", "apt-get", "brew", "winget"]);
            let mut ui = confirming_ui();

            let outcome = strategy(family).provision(&mut ui, &host).unwrap();

            assert_eq!(outcome, ProvisionOutcome::AlreadyInstalled, "{}", family);
            assert!(host.commands_run().is_empty());
            assert!(ui.prompts_shown().is_empty());
        }
    }

    #[test]
    fn node_without_npm_is_not_enough() {
        let host = MockHost::with_programs(&["node", "brew"]);
        let mut ui = MockUI::new();

        let outcome = strategy(OsFamily::Macos).provision(&mut ui, &host).unwrap();

        assert_eq!(outcome, ProvisionOutcome::Declined { manager: "brew" });
        assert_eq!(ui.prompts_shown(), [INSTALL_PROMPT_KEY.to_string()]);
    }

    #[test]
    fn linux_apt_runs_update_then_install() {
        let mut host = MockHost::with_programs(&["apt-get", "dnf"]);
        host.installs_on("sudo apt-get install -y nodejs npm", &["node", "npm"]);
        let mut ui = confirming_ui();

        let outcome = strategy(OsFamily::Linux).provision(&mut ui, &host).unwrap();

        assert_eq!(outcome, ProvisionOutcome::Installed { manager: "apt-get" });
        assert_eq!(
            host.command_strings(),
            vec![
                "sudo apt-get update".to_string(),
                "sudo apt-get install -y nodejs npm".to_string(),
            ]
        );
        assert!(ui.has_message("Found package manager: apt-get"));
    }

    #[test]
    fn linux_uses_first_present_manager_only() {
        let host = MockHost::with_programs(&["zypper", "apk"]);
        let mut ui = confirming_ui();

        let outcome = strategy(OsFamily::Linux).provision(&mut ui, &host).unwrap();

        // The install "succeeded" but node never appeared; apk is not tried.
        assert_eq!(
            outcome,
            ProvisionOutcome::NotOnPathAfterInstall { manager: "zypper" }
        );
        assert_eq!(
            host.command_strings(),
            vec!["sudo zypper install -y nodejs npm".to_string()]
        );
    }

    #[test]
    fn linux_install_always_runs_through_sudo() {
        let host = MockHost::with_programs(&["pacman"]);
        let mut ui = confirming_ui();

        strategy(OsFamily::Linux).provision(&mut ui, &host).unwrap();

        assert_eq!(
            host.command_strings(),
            vec!["sudo pacman -Sy --noconfirm nodejs npm".to_string()]
        );
    }

    #[test]
    fn linux_decline_runs_nothing() {
        let host = MockHost::with_programs(&["dnf"]);
        let mut ui = MockUI::new();
        ui.set_prompt_response(INSTALL_PROMPT_KEY, "n");

        let outcome = strategy(OsFamily::Linux).provision(&mut ui, &host).unwrap();

        assert_eq!(outcome, ProvisionOutcome::Declined { manager: "dnf" });
        assert!(host.commands_run().is_empty());
    }

    #[test]
    fn linux_without_manager_gives_manual_hint() {
        let host = MockHost::new();
        let mut ui = confirming_ui();

        let outcome = strategy(OsFamily::Linux).provision(&mut ui, &host).unwrap();

        assert_eq!(outcome, ProvisionOutcome::NoPackageManager);
        assert!(ui.has_warning("manually"));
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn macos_without_homebrew_does_not_prompt() {
        let host = MockHost::new();
        let mut ui = confirming_ui();

        let outcome = strategy(OsFamily::Macos).provision(&mut ui, &host).unwrap();

        assert_eq!(outcome, ProvisionOutcome::NoPackageManager);
        assert!(ui.has_warning("Homebrew not found"));
        assert!(ui.prompts_shown().is_empty());
        assert!(host.commands_run().is_empty());
    }

    #[test]
    fn macos_installs_with_brew() {
        let mut host = MockHost::with_programs(&["brew"]);
        host.installs_on("brew install node", &["node", "npm"]);
        let mut ui = confirming_ui();

        let outcome = strategy(OsFamily::Macos).provision(&mut ui, &host).unwrap();

        assert_eq!(outcome, ProvisionOutcome::Installed { manager: "brew" });
        assert_eq!(host.command_strings(), vec!["brew install node".to_string()]);
        assert!(!ui.has_message("Found package manager"));
    }

    #[test]
    fn windows_prefers_winget() {
        let mut host = MockHost::with_programs(&["winget", "choco"]);
        host.installs_on("winget install -e --id OpenJS.NodeJS.LTS", &["node", "npm"]);
        let mut ui = confirming_ui();

        let outcome = strategy(OsFamily::Windows).provision(&mut ui, &host).unwrap();

        assert_eq!(outcome, ProvisionOutcome::Installed { manager: "winget" });
        assert_eq!(host.commands_run().len(), 1);
        assert!(ui.questions_asked()[0].contains("winget"));
    }

    #[test]
    fn windows_falls_back_to_chocolatey() {
        let host = MockHost::with_programs(&["choco"]);
        let mut ui = MockUI::new();

        strategy(OsFamily::Windows).provision(&mut ui, &host).unwrap();

        assert!(ui.questions_asked()[0].contains("Chocolatey"));
    }

    #[test]
    fn windows_without_managers_gives_manual_hint() {
        let host = MockHost::new();
        let mut ui = confirming_ui();

        let outcome = strategy(OsFamily::Windows).provision(&mut ui, &host).unwrap();

        assert_eq!(outcome, ProvisionOutcome::NoPackageManager);
        assert!(ui.has_warning("winget/choco"));
    }

    #[test]
    fn failing_install_command_is_an_error() {
        let mut host = MockHost::with_programs(&["apt-get"]);
        host.fail_on("sudo apt-get update", 100);
        let mut ui = confirming_ui();

        let err = strategy(OsFamily::Linux)
            .provision(&mut ui, &host)
            .unwrap_err();

        assert!(matches!(
            err,
            BootstrapError::CommandFailed {
                code: Some(100),
                ..
            }
        ));
        // The install step after the failed refresh never runs.
        assert_eq!(host.commands_run().len(), 1);
    }
}
