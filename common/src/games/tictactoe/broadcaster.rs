use super::types::{Outcome, Position};

/// Presentation-side sink for what the core decides.
pub trait GameBroadcaster {
    fn on_computer_move_ready(&mut self, position: Position);

    /// Called once per game, when it ends.
    fn on_game_over(&mut self, outcome: Outcome);
}

/// Broadcaster that ignores every event, for headless play.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentBroadcaster;

impl GameBroadcaster for SilentBroadcaster {
    fn on_computer_move_ready(&mut self, _position: Position) {}

    fn on_game_over(&mut self, _outcome: Outcome) {}
}
