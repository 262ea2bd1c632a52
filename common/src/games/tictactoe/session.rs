use crate::games::SessionRng;
use crate::id_generator::generate_session_id;
use crate::{GameError, SessionId, log, log_error};
use super::bot_controller::{BotInput, calculate_move};
use super::history::{GameHistory, GamePhase};
use super::types::{Board, Difficulty, GameStatus, Mark, MoveListEntry, MoveOrder, WinningLine};
use super::win_detector::{check_win_with_line, is_full};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub difficulty: Difficulty,
    /// When set, the computer answers every X move by playing O.
    pub computer_opponent: bool,
    pub order: MoveOrder,
    /// Fixed seed for the easy bot; a random one is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            computer_opponent: true,
            order: MoveOrder::default(),
            seed: None,
        }
    }
}

/// One game being played: history, settings and the computer opponent.
///
/// Every transition runs to completion before returning, including the
/// computer's reply, so a front end only needs to redraw afterwards.
#[derive(Debug)]
pub struct TicTacToeSession {
    id: SessionId,
    history: GameHistory,
    difficulty: Difficulty,
    computer_opponent: bool,
    order: MoveOrder,
    rng: SessionRng,
    /// Set by `jump_to`, cleared by any played move. A cursor reached by
    /// navigation never triggers the computer.
    reached_by_jump: bool,
}

impl TicTacToeSession {
    pub fn create(settings: TicTacToeSessionSettings) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        let id = generate_session_id(&mut rng);

        log!(
            "Session '{}' created: difficulty={}, computer_opponent={}, seed={}",
            id,
            settings.difficulty,
            settings.computer_opponent,
            rng.seed()
        );

        Self {
            id,
            history: GameHistory::new(),
            difficulty: settings.difficulty,
            computer_opponent: settings.computer_opponent,
            order: settings.order,
            rng,
            reached_by_jump: false,
        }
    }

    pub fn reset(&mut self) {
        self.history.reset();
        self.reached_by_jump = false;
        log!("Session '{}' reset", self.id);
    }

    pub fn dispose(self) {
        log!(
            "Session '{}' disposed after {} moves ({})",
            self.id,
            self.history.len() - 1,
            self.status()
        );
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn computer_opponent(&self) -> bool {
        self.computer_opponent
    }

    pub fn order(&self) -> MoveOrder {
        self.order
    }

    pub fn current_move(&self) -> usize {
        self.history.cursor()
    }

    pub fn display_board(&self) -> Board {
        self.history.current_board()
    }

    pub fn phase(&self) -> GamePhase {
        self.history.phase()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.display_board())
    }

    pub fn status(&self) -> GameStatus {
        let board = self.display_board();
        if let Some(line) = check_win_with_line(&board) {
            GameStatus::Winner(line.mark)
        } else if is_full(&board) {
            GameStatus::Draw
        } else {
            GameStatus::NextToMove(self.history.mark_to_move())
        }
    }

    /// Plays `cell` for the side to move, then lets the computer answer.
    /// Illegal cells are ignored and `false` is returned.
    pub fn play(&mut self, cell: usize) -> bool {
        let mark = self.history.mark_to_move();
        if !self.history.play(cell) {
            return false;
        }
        self.reached_by_jump = false;
        log!(
            "Session '{}': {} played cell {} (move #{})",
            self.id,
            mark,
            cell,
            self.history.cursor()
        );

        self.settle();
        true
    }

    pub fn jump_to(&mut self, move_index: usize) -> Result<(), GameError> {
        self.history.jump_to(move_index)?;
        self.reached_by_jump = true;
        log!("Session '{}': jumped to move #{}", self.id, move_index);
        Ok(())
    }

    /// Changing difficulty always starts the game over.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        log!(
            "Session '{}': difficulty {} -> {}",
            self.id,
            self.difficulty,
            difficulty
        );
        self.difficulty = difficulty;
        self.reset();
    }

    /// Like `set_difficulty` for a difficulty typed by a user. An unknown
    /// name leaves the session exactly as it was.
    pub fn set_difficulty_named(&mut self, name: &str) -> Result<(), GameError> {
        let difficulty = name.parse::<Difficulty>()?;
        self.set_difficulty(difficulty);
        Ok(())
    }

    pub fn toggle_order(&mut self) -> MoveOrder {
        self.order = self.order.toggled();
        self.order
    }

    pub fn list_moves(&self, order: MoveOrder) -> Vec<MoveListEntry> {
        self.history.list_moves(order)
    }

    pub fn moves(&self) -> Vec<MoveListEntry> {
        self.list_moves(self.order)
    }

    /// Gives the computer its turn if the current state calls for one and
    /// returns the cell it played. Calling this again on the same state does
    /// nothing, since the reply moves the cursor back to X.
    pub fn settle(&mut self) -> Option<usize> {
        if !self.computer_opponent
            || self.reached_by_jump
            || self.history.phase() != GamePhase::Ready
            || self.history.mark_to_move() != Mark::O
        {
            return None;
        }

        let input = BotInput::new(self.history.current_board(), Mark::O);
        let cell = calculate_move(self.difficulty, &input, &mut self.rng)?;
        if !self.history.play(cell) {
            log_error!(
                "Session '{}': computer chose unplayable cell {}",
                self.id,
                cell
            );
            return None;
        }

        log!(
            "Session '{}': computer ({}) played cell {} (move #{})",
            self.id,
            self.difficulty,
            cell,
            self.history.cursor()
        );
        Some(cell)
    }
}
