use std::time::Duration;

use super::difficulty::Difficulty;

pub const DEFAULT_COMPUTER_MOVE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq)]
pub struct TicTacToeSessionSettings {
    pub difficulty: Difficulty,
    /// Pause between the human's move and the engine call. Cosmetic only.
    pub computer_move_delay: Duration,
    /// Fixed RNG seed; a random one is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            computer_move_delay: DEFAULT_COMPUTER_MOVE_DELAY,
            seed: None,
        }
    }
}
