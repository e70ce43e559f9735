use std::fmt;
use std::str::FromStr;

use super::error::{GameError, IllegalMoveReason};
use super::types::{BOARD_SIZE, Cell, GameStatus, Player, Position, WinningLine};
use super::win_detector::{Grid, check_win, check_win_with_line};

pub const WIN_SCORE: i32 = 10;
const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 3x3 grid plus a running count of marks.
///
/// `move_count` always equals the number of non-empty cells; every mutation goes
/// through `place`, `undo` or `reset` to keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: Grid,
    move_count: usize,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from an arbitrary layout. Turn alternation is not checked.
    pub fn from_cells(cells: Grid) -> Self {
        let move_count = cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count();
        Self { cells, move_count }
    }

    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        position
            .is_on_board()
            .then(|| self.cells[position.row][position.col])
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn count_of(&self, player: Player) -> usize {
        let target = Cell::from(player);
        self.cells.iter().flatten().filter(|&&cell| cell == target).count()
    }

    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), GameError> {
        let position = Position::new(row, col);
        if !position.is_on_board() {
            return Err(GameError::illegal_move(position, IllegalMoveReason::OutOfBounds));
        }
        if self.cells[row][col] != Cell::Empty {
            return Err(GameError::illegal_move(position, IllegalMoveReason::Occupied));
        }

        self.cells[row][col] = player.into();
        self.move_count += 1;
        Ok(())
    }

    /// Search-only counterpart of `place`; the caller guarantees the cell is empty.
    pub(crate) fn place_hypothetical(&mut self, row: usize, col: usize, player: Player) {
        debug_assert!(self.cells[row][col] == Cell::Empty, "hypothetical mark on ({row}, {col})");
        self.cells[row][col] = player.into();
        self.move_count += 1;
    }

    /// Backtracking step for the search. Only ever called on a cell the caller just filled.
    pub(crate) fn undo(&mut self, row: usize, col: usize) {
        debug_assert!(self.cells[row][col] != Cell::Empty, "undo on empty cell ({row}, {col})");
        self.cells[row][col] = Cell::Empty;
        self.move_count -= 1;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Empty cells in row-major order. The engine relies on this order for tie-breaks.
    pub fn available_cells(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(CELL_COUNT - self.move_count);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Cell::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    /// `+10` if the computer has a line, `-10` if the human does, `0` otherwise.
    pub fn evaluate(&self) -> i32 {
        match check_win(&self.cells) {
            Some(Player::Computer) => WIN_SCORE,
            Some(Player::Human) => -WIN_SCORE,
            None => 0,
        }
    }

    pub fn has_moves_left(&self) -> bool {
        self.move_count < CELL_COUNT
    }

    pub fn winner(&self) -> GameStatus {
        match self.evaluate() {
            WIN_SCORE => GameStatus::ComputerWon,
            score if score == -WIN_SCORE => GameStatus::HumanWon,
            _ if !self.has_moves_left() => GameStatus::Tie,
            _ => GameStatus::InProgress,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = cells.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

/// Parses nine cells in row-major order from `X`, `O` and `.`; whitespace and `/` are ignored.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if symbols.len() != CELL_COUNT {
            return Err(format!("Expected {} cells, got {}", CELL_COUNT, symbols.len()));
        }

        let mut cells = Grid::default();
        for (i, symbol) in symbols.into_iter().enumerate() {
            cells[i / BOARD_SIZE][i % BOARD_SIZE] = match symbol.to_ascii_uppercase() {
                'X' => Cell::Human,
                'O' => Cell::Computer,
                '.' | '_' => Cell::Empty,
                other => return Err(format!("Unexpected cell symbol '{}'", other)),
            };
        }
        Ok(Self::from_cells(cells))
    }
}
