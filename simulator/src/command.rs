use std::str::FromStr;
use tally_types::Outcome;
use thiserror::Error;

/// One line of interactive input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Record(Outcome),
    Undo,
    Reset,
    Show,
    History,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown command {0:?} (expected P, B, T, undo, reset, show, history or quit)")]
pub struct ParseCommandError(pub String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let command = match input.to_ascii_lowercase().as_str() {
            "u" | "undo" => Command::Undo,
            "r" | "reset" => Command::Reset,
            "s" | "show" => Command::Show,
            "h" | "history" => Command::History,
            "q" | "quit" | "exit" => Command::Quit,
            _ => input
                .parse::<Outcome>()
                .map(Command::Record)
                .map_err(|_| ParseCommandError(input.to_string()))?,
        };
        Ok(command)
    }
}
