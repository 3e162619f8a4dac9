// Interactive REPL for managing local context

use anyhow::Result;
use crossterm::{style::Stylize, terminal};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::warn;

use crate::context::{build_prompt, LocalContextState};
use crate::message::{CommandOutput, MessageType};

use super::commands::{handle_command, Command};
use super::session::Session;

/// Get current terminal width, or default to 80 if not a TTY
fn terminal_width() -> usize {
    terminal::size().map(|(w, _)| w as usize).unwrap_or(80)
}

pub struct Repl {
    session: Session,
    // UI state
    is_interactive: bool,
}

impl Repl {
    pub fn new(session: Session) -> Self {
        // Detect if we're in interactive mode (stdout is a TTY)
        let is_interactive = io::stdout().is_terminal();
        Self {
            session,
            is_interactive,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        if self.is_interactive {
            println!("localctx v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "Context file: {}",
                self.session.paths().context_file.display()
            );
            println!("Ready. Type /help for commands.");
            self.print_status_line();
        } else {
            eprintln!("# localctx - Non-interactive mode");
        }

        let stdin = io::stdin();
        loop {
            if self.is_interactive {
                println!();
                self.print_separator();
                print!("> ");
            }
            io::stdout().flush()?;

            let mut input = String::new();
            if stdin.lock().read_line(&mut input)? == 0 {
                // EOF
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            if self.is_interactive {
                self.print_separator();
                println!();
            }

            if let Some(command) = Command::parse(input) {
                if command == Command::Quit {
                    if self.is_interactive {
                        println!("Goodbye!");
                    }
                    break;
                }
                let output = handle_command(command, &mut self.session).await;
                render(&output);
                self.print_status_line();
                continue;
            }

            match self.preview_prompt(input).await {
                Ok(prompt) => println!("{}", prompt),
                Err(e) => {
                    warn!("Failed to assemble prompt: {}", e);
                    render(&CommandOutput::error(format!("Error: {}", e)));
                }
            }
        }

        Ok(())
    }

    /// The prompt that would be sent upstream for `query`.
    async fn preview_prompt(&self, query: &str) -> Result<String> {
        let prompt = build_prompt(
            self.session.fs(),
            self.session.paths(),
            self.session.local_context_enabled(),
            query,
        )
        .await?;
        Ok(prompt)
    }

    /// Print separator line that adapts to terminal width
    fn print_separator(&self) {
        let width = terminal_width();
        println!("{}", "─".repeat(width));
    }

    fn print_status_line(&self) {
        if !self.is_interactive {
            return;
        }
        let state = if self.session.local_context_enabled() {
            "on"
        } else {
            "off"
        };
        println!("{}", format!("Local context: {}", state).dark_grey());
    }
}

/// Print a command result: info to stdout, errors in red to stderr.
pub fn render(output: &CommandOutput) {
    match output.message_type {
        MessageType::Info => println!("{}", output.content),
        MessageType::Error => eprintln!("{}", output.content.as_str().red()),
    }
}
