mod board;
mod bot_controller;
mod history;
mod session;
mod types;
mod win_detector;

pub use board::{get_available_moves, is_valid_move};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move};
pub use history::{GameHistory, GamePhase, HistoryEntry};
pub use session::{TicTacToeSession, TicTacToeSessionSettings};
pub use types::{
    BOARD_SIDE, Board, CELL_COUNT, CellCoords, Difficulty, GameStatus, Mark, MoveListEntry,
    MoveOrder, WinningLine,
};
pub use win_detector::{LINES, check_win, check_win_at, check_win_with_line, is_full};
