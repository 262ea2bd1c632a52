use common::games::tictactoe::{
    BOARD_SIDE, Mark, MoveListEntry, MoveOrder, TicTacToeSession, WinningLine,
};

pub fn render_board(session: &TicTacToeSession) -> String {
    let board = session.display_board();
    let winning_line = session.winning_line();

    let rows: Vec<String> = (0..BOARD_SIDE)
        .map(|row| {
            (0..BOARD_SIDE)
                .map(|col| {
                    let cell = row * BOARD_SIDE + col;
                    render_square(cell, board.get(cell).unwrap_or_default(), winning_line)
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

fn render_square(cell: usize, mark: Mark, winning_line: Option<WinningLine>) -> String {
    match mark {
        Mark::Empty => format!(" {} ", cell + 1),
        _ if winning_line.is_some_and(|line| line.contains(cell)) => format!("[{}]", mark),
        _ => format!(" {} ", mark),
    }
}

pub fn move_label(entry: &MoveListEntry) -> String {
    match (entry.coords, entry.is_current) {
        (None, false) => "Go to game start".to_string(),
        (None, true) => "Tap square to start!".to_string(),
        (Some(coords), false) => format!("Go to move #{} {}", entry.move_index, coords),
        (Some(coords), true) => format!("You're at move #{} {}", entry.move_index, coords),
    }
}

/// Label of the control that flips the list, naming the order it switches to.
pub fn order_toggle_label(order: MoveOrder) -> &'static str {
    match order {
        MoveOrder::Ascending => "Sort Descending",
        MoveOrder::Descending => "Sort Ascending",
    }
}

pub fn render_move_list(session: &TicTacToeSession) -> String {
    let mut lines = vec![format!("[{}]", order_toggle_label(session.order()))];
    for entry in session.moves() {
        let marker = if entry.is_current { '>' } else { ' ' };
        lines.push(format!("{} {}", marker, move_label(&entry)));
    }
    lines.join("\n")
}

pub fn render_screen(session: &TicTacToeSession) -> String {
    let opponent = if session.computer_opponent() {
        format!("computer ({})", session.difficulty())
    } else {
        "two players".to_string()
    };
    format!(
        "{}  |  {}\n\n{}\n\n{}\n",
        session.status(),
        opponent,
        render_board(session),
        render_move_list(session)
    )
}
