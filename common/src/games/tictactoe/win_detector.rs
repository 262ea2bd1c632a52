use super::types::{Board, Mark, WinningLine};

/// Rows, then columns, then diagonals. The first complete line in this order
/// is the one reported when several are complete at once.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES
        .iter()
        .find_map(|&line| complete_line(board, line).map(|mark| WinningLine::new(mark, line)))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// Whether the mark at `cell` is part of a complete line. Only the lines
/// through `cell` are inspected.
pub fn check_win_at(board: &Board, cell: usize) -> Option<Mark> {
    LINES
        .iter()
        .filter(|line| line.contains(&cell))
        .find_map(|&line| complete_line(board, line))
}

pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&cell| cell != Mark::Empty)
}

fn complete_line(board: &Board, [a, b, c]: [usize; 3]) -> Option<Mark> {
    let cells = board.cells();
    let mark = cells[a];
    if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
        Some(mark)
    } else {
        None
    }
}
