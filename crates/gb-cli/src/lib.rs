//! Library half of the `gb` binary: argument types, wiring and command execution.

mod cli;
mod commands;
mod error;
mod logger;
mod runner;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use runner::{Connection, connect, execute, run};
