mod board;
mod bot_controller;
mod broadcaster;
mod difficulty;
mod error;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, WIN_SCORE};
pub use bot_controller::{
    MoveDecision, MoveStrategy, calculate_minimax_move, calculate_random_move, choose_move,
    decide_move, search_best_move, select_strategy,
};
pub use broadcaster::{GameBroadcaster, SilentBroadcaster};
pub use difficulty::Difficulty;
pub use error::{EngineMisuse, GameError, IllegalMoveReason};
pub use game_state::TicTacToeGameState;
pub use settings::{DEFAULT_COMPUTER_MOVE_DELAY, TicTacToeSessionSettings};
pub use types::{BOARD_SIZE, Cell, GameStatus, Outcome, Player, Position, WinningLine};
pub use win_detector::{Grid, check_win, check_win_with_line};
