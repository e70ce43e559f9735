mod broadcaster;
mod tictactoe_runner;

pub use broadcaster::{LocalBroadcaster, LocalEvent};
pub use tictactoe_runner::run_tictactoe_game;
