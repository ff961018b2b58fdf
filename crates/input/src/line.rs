//! Line-mode commands: one typed word per turn.

use crate::types::GameAction;

/// What a line of player input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Action(GameAction),
    Quit,
    /// Blank line; the runner just redraws.
    Empty,
    Unknown(String),
}

/// Parse one line typed by the player.
///
/// Accepts the direction words and letters understood by
/// [`GameAction::from_str`], plus `q` / `quit` / `exit`.
pub fn parse_line(input: &str) -> LineCommand {
    let word = input.trim();
    if word.is_empty() {
        return LineCommand::Empty;
    }
    match word.to_lowercase().as_str() {
        "q" | "quit" | "exit" => LineCommand::Quit,
        _ => match GameAction::from_str(word) {
            Some(action) => LineCommand::Action(action),
            None => LineCommand::Unknown(word.to_string()),
        },
    }
}
