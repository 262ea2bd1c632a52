use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GameError;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    /// Moves first, on even history indices.
    X,
    /// Moves second, on odd history indices. The computer plays this side.
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    /// Side to move once `move_index` moves have been played.
    pub fn to_move(move_index: usize) -> Mark {
        if move_index % 2 == 0 { Mark::X } else { Mark::O }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Empty => write!(f, " "),
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Snapshot of the 3x3 grid in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied()
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Copy of this board with `cell` set to `mark`. Out-of-range cells
    /// leave the copy unchanged.
    pub fn with_mark(&self, cell: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.set(cell, mark);
        next
    }

    pub(crate) fn set(&mut self, cell: usize, mark: Mark) {
        if let Some(slot) = self.cells.get_mut(cell) {
            *slot = mark;
        }
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Mark::Empty).count()
    }
}

/// 1-based row and column of a cell, as shown to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoords {
    pub row: usize,
    pub col: usize,
}

impl CellCoords {
    pub fn from_index(cell: usize) -> Option<Self> {
        (cell < CELL_COUNT).then(|| Self {
            row: cell / BOARD_SIDE + 1,
            col: cell % BOARD_SIDE + 1,
        })
    }

    pub fn to_index(&self) -> Option<usize> {
        if (1..=BOARD_SIDE).contains(&self.row) && (1..=BOARD_SIDE).contains(&self.col) {
            Some((self.row - 1) * BOARD_SIDE + (self.col - 1))
        } else {
            None
        }
    }
}

impl fmt::Display for CellCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.cells.contains(&cell)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Winner(Mark),
    Draw,
    NextToMove(Mark),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Winner(mark) => write!(f, "Winner: {}", mark),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::NextToMove(mark) => write!(f, "Next player: {}", mark),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::UnsupportedDifficulty(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveOrder {
    #[default]
    Ascending,
    Descending,
}

impl MoveOrder {
    pub fn toggled(self) -> MoveOrder {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }
}

/// One row of the move list a front end renders as navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveListEntry {
    pub move_index: usize,
    /// `None` for the game-start entry.
    pub coords: Option<CellCoords>,
    pub is_current: bool,
}

/// Parses boards written as nine characters of `X`, `O` and `.`.
#[cfg(test)]
pub(crate) fn board_from_str(layout: &str) -> Board {
    let mut cells = [Mark::Empty; CELL_COUNT];
    for (cell, ch) in layout.chars().enumerate() {
        cells[cell] = match ch {
            'X' => Mark::X,
            'O' => Mark::O,
            _ => Mark::Empty,
        };
    }
    Board::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_are_one_based_row_major() {
        assert_eq!(CellCoords::from_index(0), Some(CellCoords { row: 1, col: 1 }));
        assert_eq!(CellCoords::from_index(5), Some(CellCoords { row: 2, col: 3 }));
        assert_eq!(CellCoords::from_index(7), Some(CellCoords { row: 3, col: 2 }));
        assert_eq!(CellCoords::from_index(9), None);
    }

    #[test]
    fn test_coords_back_to_index() {
        for cell in 0..CELL_COUNT {
            let coords = CellCoords::from_index(cell).unwrap();
            assert_eq!(coords.to_index(), Some(cell));
        }
        assert_eq!(CellCoords { row: 0, col: 1 }.to_index(), None);
        assert_eq!(CellCoords { row: 2, col: 4 }.to_index(), None);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X);
        assert_eq!(board.get(4), Some(Mark::Empty));
        assert_eq!(next.get(4), Some(Mark::X));
        assert_eq!(next.mark_count(), 1);
        assert_eq!(board.with_mark(12, Mark::O), board);
    }

    #[test]
    fn test_mark_to_move_alternates() {
        assert_eq!(Mark::to_move(0), Mark::X);
        assert_eq!(Mark::to_move(1), Mark::O);
        assert_eq!(Mark::to_move(6), Mark::X);
        assert_eq!(Mark::Empty.opponent(), None);
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(
            "nightmare".parse::<Difficulty>(),
            Err(GameError::UnsupportedDifficulty("nightmare".to_string()))
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(GameStatus::Winner(Mark::X).to_string(), "Winner: X");
        assert_eq!(GameStatus::Draw.to_string(), "Draw");
        assert_eq!(GameStatus::NextToMove(Mark::O).to_string(), "Next player: O");
    }
}
