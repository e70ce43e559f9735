use super::types::{BOARD_SIZE, Cell, Player, Position, WinningLine};

pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Every row, column and diagonal as `(row, col)` triples.
const LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn line_owner(grid: &Grid, line: &[(usize, usize); BOARD_SIZE]) -> Option<Player> {
    let (r0, c0) = line[0];
    let player = grid[r0][c0].player()?;
    line[1..]
        .iter()
        .all(|&(r, c)| grid[r][c] == grid[r0][c0])
        .then_some(player)
}

pub fn check_win(grid: &Grid) -> Option<Player> {
    LINES.iter().find_map(|line| line_owner(grid, line))
}

pub fn check_win_with_line(grid: &Grid) -> Option<WinningLine> {
    LINES.iter().find_map(|line| {
        line_owner(grid, line)
            .map(|player| WinningLine::new(player, (*line).map(|(r, c)| Position::new(r, c))))
    })
}
