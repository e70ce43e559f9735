use common::games::tictactoe::Cell;

const HUMAN_COLOR: &str = "\x1b[1;34m";
const COMPUTER_COLOR: &str = "\x1b[1;31m";
const HIGHLIGHT_COLOR: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

pub fn paint_cell(cell: Cell, highlighted: bool, use_colors: bool) -> String {
    let symbol = cell.symbol();
    if !use_colors || cell == Cell::Empty {
        return symbol.to_string();
    }
    let color = match (highlighted, cell) {
        (true, _) => HIGHLIGHT_COLOR,
        (false, Cell::Human) => HUMAN_COLOR,
        _ => COMPUTER_COLOR,
    };
    format!("{}{}{}", color, symbol, RESET)
}
