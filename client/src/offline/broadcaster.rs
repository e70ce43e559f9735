use common::games::tictactoe::{GameBroadcaster, Outcome, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalEvent {
    ComputerMove(Position),
    GameOver(Outcome),
}

/// Queues core events until the terminal loop renders them.
#[derive(Debug, Default)]
pub struct LocalBroadcaster {
    pending: Vec<LocalEvent>,
}

impl LocalBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> Vec<LocalEvent> {
        std::mem::take(&mut self.pending)
    }
}

impl GameBroadcaster for LocalBroadcaster {
    fn on_computer_move_ready(&mut self, position: Position) {
        self.pending.push(LocalEvent::ComputerMove(position));
    }

    fn on_game_over(&mut self, outcome: Outcome) {
        self.pending.push(LocalEvent::GameOver(outcome));
    }
}
