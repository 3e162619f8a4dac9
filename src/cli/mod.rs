// CLI module
// Public interface for command-line interface

mod commands;
mod repl;
mod session;

pub use commands::{handle_command, Command};
pub use repl::{render, Repl};
pub use session::Session;
