use common::games::tictactoe::{Difficulty, MoveOrder, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub computer_opponent: bool,
    #[serde(default)]
    pub descending: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            difficulty: self.difficulty,
            computer_opponent: self.computer_opponent,
            order: if self.descending {
                MoveOrder::Descending
            } else {
                MoveOrder::Ascending
            },
            seed: self.seed,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            computer_opponent: true,
            descending: false,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_settings_follow_config() {
        let config = GameConfig {
            difficulty: Difficulty::Hard,
            computer_opponent: false,
            descending: true,
            seed: Some(8),
        };
        let settings = config.session_settings();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert!(!settings.computer_opponent);
        assert_eq!(settings.order, MoveOrder::Descending);
        assert_eq!(settings.seed, Some(8));
    }
}
