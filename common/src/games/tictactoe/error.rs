use std::fmt;

use super::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    OutOfBounds,
    Occupied,
    GameOver,
    NotYourTurn,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::OutOfBounds => write!(f, "position out of bounds"),
            IllegalMoveReason::Occupied => write!(f, "cell is already marked"),
            IllegalMoveReason::GameOver => write!(f, "game is already over"),
            IllegalMoveReason::NotYourTurn => write!(f, "not your turn"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineMisuse {
    NoMovesLeft,
    GameAlreadyWon,
}

impl fmt::Display for EngineMisuse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineMisuse::NoMovesLeft => write!(f, "move engine called on a full board"),
            EngineMisuse::GameAlreadyWon => write!(f, "move engine called on a finished game"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    IllegalMove {
        position: Position,
        reason: IllegalMoveReason,
    },
    EngineMisuse(EngineMisuse),
}

impl GameError {
    pub fn illegal_move(position: Position, reason: IllegalMoveReason) -> Self {
        GameError::IllegalMove { position, reason }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove { position, reason } => {
                write!(f, "Illegal move at {}: {}", position, reason)
            }
            GameError::EngineMisuse(misuse) => write!(f, "Engine misuse: {}", misuse),
        }
    }
}

impl std::error::Error for GameError {}

impl From<EngineMisuse> for GameError {
    fn from(misuse: EngineMisuse) -> Self {
        GameError::EngineMisuse(misuse)
    }
}
