use std::str::FromStr;

use common::games::tictactoe::Difficulty;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientCommand {
    PlaceMark { row: usize, col: usize },
    Reset,
    SetDifficulty(Difficulty),
    Help,
    Quit,
}

impl FromStr for ClientCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|w| !w.is_empty())
            .collect();

        match words.as_slice() {
            [] => Err("Empty command, type 'help' for the list of commands".to_string()),
            ["reset" | "new" | "n"] => Ok(ClientCommand::Reset),
            ["help" | "h" | "?"] => Ok(ClientCommand::Help),
            ["quit" | "exit" | "q"] => Ok(ClientCommand::Quit),
            ["difficulty" | "d", tier] => tier.parse().map(ClientCommand::SetDifficulty),
            [row, col] => {
                let row = row
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid row '{}'", row))?;
                let col = col
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid column '{}'", col))?;
                Ok(ClientCommand::PlaceMark { row, col })
            }
            _ => Err(format!("Unknown command '{}', type 'help'", s.trim())),
        }
    }
}
