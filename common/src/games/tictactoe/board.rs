use super::types::{Board, CELL_COUNT, Mark};
use super::win_detector::check_win;

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, cell: usize) -> bool {
    cell < CELL_COUNT && board.get(cell) == Some(Mark::Empty) && check_win(board).is_none()
}
