use crate::games::SessionRng;
use super::board::{Board, WIN_SCORE};
use super::difficulty::Difficulty;
use super::error::EngineMisuse;
use super::types::{BOARD_SIZE, Cell, Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStrategy {
    Random,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDecision {
    pub position: Position,
    pub strategy: MoveStrategy,
    /// Minimax value of the chosen cell; `None` for random moves.
    pub score: Option<i32>,
}

/// Picks the computer's next cell. The board is searched in place and restored before returning.
pub fn choose_move(
    board: &mut Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<Position, EngineMisuse> {
    decide_move(board, difficulty, rng).map(|decision| decision.position)
}

pub fn decide_move(
    board: &mut Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<MoveDecision, EngineMisuse> {
    ensure_playable(board)?;

    match select_strategy(difficulty, rng) {
        MoveStrategy::Random => Ok(MoveDecision {
            position: calculate_random_move(board, rng)?,
            strategy: MoveStrategy::Random,
            score: None,
        }),
        MoveStrategy::Search => {
            let (position, score) = search_best_move(board)?;
            Ok(MoveDecision {
                position,
                strategy: MoveStrategy::Search,
                score: Some(score),
            })
        }
    }
}

pub fn select_strategy(difficulty: Difficulty, rng: &mut SessionRng) -> MoveStrategy {
    if rng.chance(difficulty.random_move_probability()) {
        MoveStrategy::Random
    } else {
        MoveStrategy::Search
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<Position, EngineMisuse> {
    ensure_playable(board)?;
    let available_moves = board.available_cells();
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

pub fn calculate_minimax_move(board: &mut Board) -> Result<Position, EngineMisuse> {
    search_best_move(board).map(|(position, _)| position)
}

/// Best cell for the computer and its minimax value. Ties keep the first cell in row-major order.
pub fn search_best_move(board: &mut Board) -> Result<(Position, i32), EngineMisuse> {
    ensure_playable(board)?;

    let mut best: Option<(Position, i32)> = None;
    for position in board.available_cells() {
        board.place_hypothetical(position.row, position.col, Player::Computer);
        let score = minimax(board, 0, false, i32::MIN, i32::MAX);
        board.undo(position.row, position.col);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((position, score));
        }
    }

    best.ok_or(EngineMisuse::NoMovesLeft)
}

fn ensure_playable(board: &Board) -> Result<(), EngineMisuse> {
    if board.evaluate() != 0 {
        return Err(EngineMisuse::GameAlreadyWon);
    }
    if !board.has_moves_left() {
        return Err(EngineMisuse::NoMovesLeft);
    }
    Ok(())
}

/// Alpha-beta minimax from the computer's point of view.
///
/// Wins score `10 - depth` and losses `-10 + depth`, so faster wins and slower
/// losses are preferred. Cells are scanned in row-major order without allocating.
pub(crate) fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    let score = board.evaluate();
    if score == WIN_SCORE {
        return score - depth;
    }
    if score == -WIN_SCORE {
        return score + depth;
    }
    if !board.has_moves_left() {
        return 0;
    }

    let (mover, mut best) = if is_maximizing {
        (Player::Computer, i32::MIN)
    } else {
        (Player::Human, i32::MAX)
    };

    'scan: for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board.cells()[row][col] != Cell::Empty {
                continue;
            }

            board.place_hypothetical(row, col, mover);
            let eval = minimax(board, depth + 1, !is_maximizing, alpha, beta);
            board.undo(row, col);

            if is_maximizing {
                best = best.max(eval);
                alpha = alpha.max(best);
            } else {
                best = best.min(eval);
                beta = beta.min(best);
            }

            if beta <= alpha {
                break 'scan;
            }
        }
    }

    best
}
