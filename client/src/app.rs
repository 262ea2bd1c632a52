use common::GameError;
use common::games::tictactoe::TicTacToeSession;

use crate::command::{Command, HELP};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Redraw,
    Message(String),
    Quit,
}

/// Applies one user intent to the session.
pub fn apply(session: &mut TicTacToeSession, command: Command) -> Result<Outcome, GameError> {
    match command {
        Command::Play(cell) => {
            // Occupied squares and moves after the game ended are ignored.
            session.play(cell);
            Ok(Outcome::Redraw)
        }
        Command::Jump(move_index) => {
            session.jump_to(move_index)?;
            Ok(Outcome::Redraw)
        }
        Command::Difficulty(name) => {
            session.set_difficulty_named(&name)?;
            Ok(Outcome::Redraw)
        }
        Command::ToggleOrder => {
            session.toggle_order();
            Ok(Outcome::Redraw)
        }
        Command::Restart => {
            session.reset();
            Ok(Outcome::Redraw)
        }
        Command::Help => Ok(Outcome::Message(HELP.to_string())),
        Command::Quit => Ok(Outcome::Quit),
    }
}
