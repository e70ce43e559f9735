use std::error::Error;
use std::io::{BufRead, Write};

use common::games::tictactoe::{
    BOARD_SIZE, Difficulty, GameError, Player, Position, TicTacToeGameState,
    TicTacToeSessionSettings,
};
use common::log;

use super::{LocalBroadcaster, LocalEvent};
use crate::colors::paint_cell;
use crate::state::ClientCommand;

const HELP: &str = "Commands:
  <row> <col>          place your mark (0-based, e.g. '1 1' for the center)
  reset                start a new game
  difficulty <tier>    easy | medium | hard | impossible
  help                 show this help
  quit                 leave the game";

type Game = TicTacToeGameState<LocalBroadcaster>;

/// Plays games on a line-based terminal until `quit` or end of input.
///
/// Returns the difficulty in effect at exit so it can be remembered.
pub fn run_tictactoe_game<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    settings: &TicTacToeSessionSettings,
    use_colors: bool,
) -> Result<Difficulty, Box<dyn Error>> {
    let mut game = TicTacToeGameState::new(settings, LocalBroadcaster::new());

    writeln!(output, "Tic-Tac-Toe vs. computer, difficulty: {}", game.difficulty())?;
    writeln!(output, "{}", HELP)?;
    render_board(output, &game, use_colors)?;
    prompt(output, &game)?;

    for line in input.lines() {
        let line = line?;
        let command = match line.parse::<ClientCommand>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{}", message)?;
                prompt(output, &game)?;
                continue;
            }
        };

        match command {
            ClientCommand::PlaceMark { row, col } => match game.on_human_select(row, col) {
                Ok(()) => {
                    render_events(output, &mut game)?;
                    render_board(output, &game, use_colors)?;
                }
                Err(err @ GameError::IllegalMove { .. }) => writeln!(output, "{}", err)?,
                Err(err @ GameError::EngineMisuse(_)) => {
                    log!("Aborting game: {}", err);
                    return Err(err.into());
                }
            },
            ClientCommand::Reset => {
                game.on_reset();
                writeln!(output, "New game!")?;
                render_board(output, &game, use_colors)?;
            }
            ClientCommand::SetDifficulty(difficulty) => {
                game.set_difficulty(difficulty);
                writeln!(output, "Difficulty: {}", difficulty.as_str().to_uppercase())?;
            }
            ClientCommand::Help => writeln!(output, "{}", HELP)?,
            ClientCommand::Quit => break,
        }

        prompt(output, &game)?;
    }

    Ok(game.difficulty())
}

fn render_events<W: Write>(output: &mut W, game: &mut Game) -> std::io::Result<()> {
    for event in game.broadcaster_mut().drain() {
        match event {
            LocalEvent::ComputerMove(position) => writeln!(output, "Computer played {}", position)?,
            LocalEvent::GameOver(outcome) => writeln!(output, "Game over: {}", outcome)?,
        }
    }
    Ok(())
}

fn render_board<W: Write>(output: &mut W, game: &Game, use_colors: bool) -> std::io::Result<()> {
    let highlighted: Vec<Position> = game
        .winning_line()
        .map(|line| line.cells.to_vec())
        .unwrap_or_default();

    writeln!(output)?;
    writeln!(output, "  0 1 2")?;
    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let position = Position::new(row, col);
                let cell = game.board().cells()[row][col];
                paint_cell(cell, highlighted.contains(&position), use_colors)
            })
            .collect();
        writeln!(output, "{} {}", row, cells.join(" "))?;
    }
    writeln!(output)
}

fn prompt<W: Write>(output: &mut W, game: &Game) -> std::io::Result<()> {
    if game.status().is_over() {
        write!(output, "Type 'reset' to play again> ")?;
    } else if game.current_player() == Player::Human {
        write!(output, "Your turn! (You are X)> ")?;
    }
    output.flush()
}
