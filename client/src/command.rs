use common::GameError;
use common::games::tictactoe::{CELL_COUNT, CellCoords};

/// A user intent typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(usize),
    Jump(usize),
    Difficulty(String),
    ToggleOrder,
    Restart,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  <1-9>              play the numbered square
  <row> <col>        play by 1-based row and column
  jump <n>           go to move #n (0 is the game start)
  difficulty <name>  easy or hard; starts a new game
  order              toggle ascending/descending move list
  restart            start a new game
  help               show this text
  quit               leave";

impl Command {
    pub fn parse(input: &str) -> Result<Command, GameError> {
        let mut words = input.split_whitespace();
        let Some(first) = words.next() else {
            return Err(GameError::InvalidCell("empty input".to_string()));
        };
        let rest: Vec<&str> = words.collect();

        match (first.to_ascii_lowercase().as_str(), rest.as_slice()) {
            ("q" | "quit" | "exit", []) => Ok(Command::Quit),
            ("h" | "help" | "?", []) => Ok(Command::Help),
            ("o" | "order" | "sort", []) => Ok(Command::ToggleOrder),
            ("r" | "restart", []) => Ok(Command::Restart),
            ("d" | "difficulty", [name]) => Ok(Command::Difficulty(name.to_string())),
            ("j" | "jump", [index]) => index
                .parse::<usize>()
                .map(Command::Jump)
                .map_err(|_| GameError::InvalidCell(format!("'{}' is not a move number", index))),
            (_, []) => parse_square_number(first).map(Command::Play),
            (_, [col]) => parse_row_col(first, col).map(Command::Play),
            _ => Err(GameError::InvalidCell(input.trim().to_string())),
        }
    }
}

fn parse_square_number(text: &str) -> Result<usize, GameError> {
    match text.parse::<usize>() {
        Ok(number) if (1..=CELL_COUNT).contains(&number) => Ok(number - 1),
        _ => Err(GameError::InvalidCell(format!(
            "'{}' is not a square between 1 and {}",
            text, CELL_COUNT
        ))),
    }
}

fn parse_row_col(row: &str, col: &str) -> Result<usize, GameError> {
    let invalid = || GameError::InvalidCell(format!("({}, {}) is not on the board", row, col));
    let row = row.parse::<usize>().map_err(|_| invalid())?;
    let col = col.parse::<usize>().map_err(|_| invalid())?;
    CellCoords { row, col }.to_index().ok_or_else(invalid)
}
