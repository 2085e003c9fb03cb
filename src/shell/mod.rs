//! External command execution and search-path lookup.

pub mod command;
pub mod path;

pub use command::{capture, run, CommandLine, CommandOutcome};
pub use path::{is_on_path, which};
