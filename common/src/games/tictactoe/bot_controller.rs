use crate::games::SessionRng;
use crate::log_debug;
use super::board::get_available_moves;
use super::types::{Board, Difficulty, Mark};
use super::win_detector::{check_win, check_win_at};

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, current_mark: Mark) -> Self {
        Self { board, current_mark }
    }
}

/// Picks the cell the computer plays. `None` only when the board has no
/// empty cell.
pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    let chosen = match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    };
    log_debug!(
        "Bot ({}) playing {} chose {:?}",
        difficulty,
        input.current_mark,
        chosen
    );
    chosen
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Full-depth search with O maximizing and X minimizing, O to move at the
/// root whatever `current_mark` says. Ties keep the lowest cell index.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for cell in available_moves {
        // Full window per root move keeps root scores exact under pruning.
        let score = score_move(&mut board, cell, 0, true, i32::MIN, i32::MAX);
        if score > best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    best_move
}

fn terminal_score(winner: Mark, depth: usize) -> i32 {
    let depth = depth as i32;
    match winner {
        Mark::O => WIN_SCORE - depth,
        Mark::X => depth - WIN_SCORE,
        Mark::Empty => 0,
    }
}

/// Plays `cell` for the side to move at `depth`, scores the result and
/// restores the cell before returning.
fn score_move(
    board: &mut Board,
    cell: usize,
    depth: usize,
    is_maximizing: bool,
    alpha: i32,
    beta: i32,
) -> i32 {
    let mark = if is_maximizing { Mark::O } else { Mark::X };
    board.set(cell, mark);

    let score = if check_win_at(board, cell).is_some() {
        terminal_score(mark, depth + 1)
    } else {
        minimax(board, depth + 1, !is_maximizing, alpha, beta)
    };

    board.set(cell, Mark::Empty);
    score
}

fn minimax(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = check_win(board) {
        return terminal_score(winner, depth);
    }

    let moves = get_available_moves(board);
    if moves.is_empty() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for cell in moves {
            let eval = score_move(board, cell, depth, true, alpha, beta);
            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for cell in moves {
            let eval = score_move(board, cell, depth, false, alpha, beta);
            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
