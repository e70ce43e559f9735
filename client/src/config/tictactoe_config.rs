use std::time::Duration;

use common::config::Validate;
use common::games::tictactoe::{Difficulty, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

const MAX_COMPUTER_MOVE_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub difficulty: Difficulty,
    pub computer_move_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TicTacToeConfig {
    /// `seed_override` wins over the configured seed.
    pub fn to_session_settings(&self, seed_override: Option<u64>) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            difficulty: self.difficulty,
            computer_move_delay: Duration::from_millis(self.computer_move_delay_ms),
            seed: seed_override.or(self.seed),
        }
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_move_delay_ms > MAX_COMPUTER_MOVE_DELAY_MS {
            return Err(format!(
                "computer_move_delay_ms must not exceed {}",
                MAX_COMPUTER_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        let settings = TicTacToeSessionSettings::default();
        Self {
            difficulty: settings.difficulty,
            computer_move_delay_ms: settings.computer_move_delay.as_millis() as u64,
            seed: settings.seed,
        }
    }
}
