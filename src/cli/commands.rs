// Slash command handling

use crate::context::toggle;
use crate::message::CommandOutput;

use super::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    ClearContext,
    ContextStatus,
    ContextEnable,
    ContextDisable,
    ContextUnknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split_whitespace();
        let head = parts.next()?;
        let sub = parts.next();

        match (head, sub) {
            ("/help", _) => Some(Command::Help),
            ("/quit" | "/exit", _) => Some(Command::Quit),
            ("/clearcontext", _) => Some(Command::ClearContext),
            ("/context", None) => Some(Command::ContextStatus),
            ("/context", Some("enable")) => Some(Command::ContextEnable),
            ("/context", Some("disable")) => Some(Command::ContextDisable),
            ("/context", Some(other)) => Some(Command::ContextUnknown(other.to_string())),
            _ => None,
        }
    }
}

pub async fn handle_command(command: Command, session: &mut Session) -> CommandOutput {
    let context_file = session.paths().context_file.clone();

    match command {
        Command::Help => CommandOutput::info(format_help()),
        Command::Quit => CommandOutput::info("Goodbye!"),
        Command::ClearContext => session.clearer().clear().await,
        Command::ContextStatus => toggle::status(&*session, &context_file),
        Command::ContextEnable => toggle::enable(session, &context_file),
        Command::ContextDisable => toggle::disable(session, &context_file),
        Command::ContextUnknown(sub) => CommandOutput::error(format!(
            "Unknown /context subcommand '{}'. Use: /context enable | /context disable",
            sub
        )),
    }
}

fn format_help() -> String {
    r#"Available commands:
  /help              - Show this help message
  /quit              - Exit the REPL
  /clearcontext      - Clear the local context file and downloaded images
  /context           - Show whether local context is included in prompts
  /context enable    - Include local context in prompts
  /context disable   - Stop including local context in prompts

Anything else is treated as a prompt."#
        .to_string()
}
