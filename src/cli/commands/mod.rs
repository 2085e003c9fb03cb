//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands act on the machine only
//! through a [`ProvisionHost`](crate::provision::ProvisionHost), so the
//! whole flow runs against a scripted host in tests.

pub mod completions;
pub mod dispatcher;
pub mod install;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use install::InstallCommand;
pub use status::{StatusCommand, StatusReport};
