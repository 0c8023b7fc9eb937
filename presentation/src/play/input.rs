//! Parsing of REPL input lines

/// Slash commands understood by the quiz REPL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    Score,
    Invite,
    Again,
    Unknown(String),
}

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// A bare Enter: continue past feedback.
    Continue,
    Command(ReplCommand),
    /// A choice number or city name.
    Answer(String),
}

pub fn parse_input(line: &str) -> ReplInput {
    let line = line.trim();
    if line.is_empty() {
        return ReplInput::Continue;
    }
    if !line.starts_with('/') {
        return ReplInput::Answer(line.to_string());
    }

    let command = match line.to_lowercase().as_str() {
        "/quit" | "/exit" | "/q" => ReplCommand::Quit,
        "/help" | "/h" | "/?" => ReplCommand::Help,
        "/score" | "/s" => ReplCommand::Score,
        "/invite" | "/i" => ReplCommand::Invite,
        "/again" | "/restart" => ReplCommand::Again,
        _ => ReplCommand::Unknown(line.to_string()),
    };
    ReplInput::Command(command)
}

/// Whether a confirmation answer means yes.
pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
