//! node-bootstrap CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use node_bootstrap::cli::{Cli, CommandDispatcher};
use node_bootstrap::provision::SystemHost;
use node_bootstrap::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("node_bootstrap=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("node_bootstrap=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// The directory holding the running executable.
fn executable_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("Could not locate the running executable")?;
    exe.parent()
        .map(PathBuf::from)
        .with_context(|| format!("Executable has no parent directory: {}", exe.display()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("node-bootstrap starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(output_mode);

    let project_dir = match cli.project.clone() {
        Some(dir) => dir,
        None => match executable_dir() {
            Ok(dir) => dir,
            Err(e) => {
                ui.error(&format!("Error: {:#}", e));
                return ExitCode::from(1);
            }
        },
    };
    tracing::debug!(project_dir = %project_dir.display(), "project directory");

    let host = SystemHost::new();
    let dispatcher = CommandDispatcher::new(project_dir, &host);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
