use crate::GameError;
use super::board::is_valid_move;
use super::types::{Board, CellCoords, Mark, MoveListEntry, MoveOrder};
use super::win_detector::{check_win, is_full};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub board: Board,
    /// Cell played to reach this board, `None` for the starting board.
    pub cell: Option<usize>,
}

impl HistoryEntry {
    fn initial() -> Self {
        Self {
            board: Board::new(),
            cell: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Ready,
    Concluded,
}

/// Boards reached so far plus a cursor into them.
///
/// The cursor always points at an existing entry. Playing while the cursor
/// is behind the last entry discards everything after the cursor first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GameHistory {
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    pub fn current_board(&self) -> Board {
        self.current().board
    }

    pub fn mark_to_move(&self) -> Mark {
        Mark::to_move(self.cursor)
    }

    pub fn phase(&self) -> GamePhase {
        let board = self.current_board();
        if check_win(&board).is_some() || is_full(&board) {
            GamePhase::Concluded
        } else {
            GamePhase::Ready
        }
    }

    /// Applies a move for the side to move. Returns `false` and changes
    /// nothing when the move is not legal on the current board.
    pub fn play(&mut self, cell: usize) -> bool {
        let board = self.current_board();
        if self.phase() != GamePhase::Ready || !is_valid_move(&board, cell) {
            return false;
        }

        let next = HistoryEntry {
            board: board.with_mark(cell, self.mark_to_move()),
            cell: Some(cell),
        };
        self.entries.truncate(self.cursor + 1);
        self.entries.push(next);
        self.cursor = self.entries.len() - 1;
        true
    }

    /// Moves the cursor without touching the entries.
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), GameError> {
        if move_index >= self.entries.len() {
            return Err(GameError::OutOfRange {
                index: move_index,
                len: self.entries.len(),
            });
        }
        self.cursor = move_index;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(HistoryEntry::initial());
        self.cursor = 0;
    }

    pub fn list_moves(&self, order: MoveOrder) -> Vec<MoveListEntry> {
        let listed = self
            .entries
            .iter()
            .enumerate()
            .map(|(move_index, entry)| MoveListEntry {
                move_index,
                coords: entry.cell.and_then(CellCoords::from_index),
                is_current: move_index == self.cursor,
            });
        match order {
            MoveOrder::Ascending => listed.collect(),
            MoveOrder::Descending => listed.rev().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_after(cells: &[usize]) -> GameHistory {
        let mut history = GameHistory::new();
        for &cell in cells {
            assert!(history.play(cell), "cell {} should be playable", cell);
        }
        history
    }

    #[test]
    fn test_new_history_has_single_empty_entry() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current_board(), Board::new());
        assert_eq!(history.current().cell, None);
        assert_eq!(history.phase(), GamePhase::Ready);
    }

    #[test]
    fn test_play_alternates_marks() {
        let history = history_after(&[4, 0, 8]);
        let board = history.current_board();
        assert_eq!(board.get(4), Some(Mark::X));
        assert_eq!(board.get(0), Some(Mark::O));
        assert_eq!(board.get(8), Some(Mark::X));
        assert_eq!(history.cursor(), 3);
        assert_eq!(history.mark_to_move(), Mark::O);
    }

    #[test]
    fn test_play_keeps_earlier_snapshots_intact() {
        let history = history_after(&[4, 0]);
        assert_eq!(history.entries()[0].board, Board::new());
        assert_eq!(history.entries()[1].board.mark_count(), 1);
        assert_eq!(history.entries()[1].cell, Some(4));
        assert_eq!(history.entries()[2].cell, Some(0));
    }

    #[test]
    fn test_illegal_moves_are_ignored() {
        let mut history = history_after(&[4]);
        let before = history.clone();
        assert!(!history.play(4));
        assert!(!history.play(9));
        assert_eq!(history, before);
    }

    #[test]
    fn test_no_moves_after_conclusion() {
        let mut history = history_after(&[0, 3, 1, 4, 2]);
        assert_eq!(history.phase(), GamePhase::Concluded);
        let before = history.clone();
        assert!(!history.play(5));
        assert_eq!(history, before);
    }

    #[test]
    fn test_draw_concludes_the_game() {
        let history = history_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(is_full(&history.current_board()));
        assert_eq!(check_win(&history.current_board()), None);
        assert_eq!(history.phase(), GamePhase::Concluded);
    }

    #[test]
    fn test_jump_to_current_changes_nothing() {
        let mut history = history_after(&[4, 0, 8]);
        let before = history.clone();
        assert_eq!(history.jump_to(history.cursor()), Ok(()));
        assert_eq!(history, before);
    }

    #[test]
    fn test_jump_out_of_range_is_reported() {
        let mut history = history_after(&[4, 0]);
        assert_eq!(
            history.jump_to(3),
            Err(GameError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn test_jump_keeps_future_entries() {
        let mut history = history_after(&[4, 0, 8, 2]);
        history.jump_to(1).unwrap();
        assert_eq!(history.len(), 5);
        assert_eq!(history.current_board().mark_count(), 1);
        history.jump_to(4).unwrap();
        assert_eq!(history.current_board().mark_count(), 4);
    }

    #[test]
    fn test_jump_is_allowed_after_conclusion() {
        let mut history = history_after(&[0, 3, 1, 4, 2]);
        history.jump_to(2).unwrap();
        assert_eq!(history.phase(), GamePhase::Ready);
        history.jump_to(5).unwrap();
        assert_eq!(history.phase(), GamePhase::Concluded);
    }

    #[test]
    fn test_play_after_jump_truncates_future() {
        let mut history = history_after(&[4, 0, 8, 2]);
        assert_eq!(history.len(), 5);
        assert_eq!(history.cursor(), 4);

        history.jump_to(2).unwrap();
        assert!(history.play(6));

        assert_eq!(history.len(), 4);
        assert_eq!(history.cursor(), 3);
        let cells: Vec<_> = history.entries().iter().map(|e| e.cell).collect();
        assert_eq!(cells, vec![None, Some(4), Some(0), Some(6)]);
        assert_eq!(history.current_board().get(8), Some(Mark::Empty));
        assert_eq!(history.current_board().get(6), Some(Mark::X));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut history = history_after(&[4, 0, 8]);
        history.jump_to(1).unwrap();
        history.reset();
        assert_eq!(history, GameHistory::new());
    }

    #[test]
    fn test_list_moves_in_both_orders() {
        let mut history = history_after(&[4, 0]);
        history.jump_to(1).unwrap();

        let ascending = history.list_moves(MoveOrder::Ascending);
        assert_eq!(
            ascending,
            vec![
                MoveListEntry { move_index: 0, coords: None, is_current: false },
                MoveListEntry {
                    move_index: 1,
                    coords: Some(CellCoords { row: 2, col: 2 }),
                    is_current: true,
                },
                MoveListEntry {
                    move_index: 2,
                    coords: Some(CellCoords { row: 1, col: 1 }),
                    is_current: false,
                },
            ]
        );

        let descending = history.list_moves(MoveOrder::Descending);
        let indices: Vec<_> = descending.iter().map(|m| m.move_index).collect();
        assert_eq!(indices, vec![2, 1, 0]);
        assert_eq!(history.entries()[2].cell, Some(0));
    }
}
