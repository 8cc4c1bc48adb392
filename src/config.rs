//! Board configuration and the standard difficulty presets.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest row or column count; coordinates pack into 16 bits each.
pub const MAX_SIDE: usize = u16::MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub mines: usize,
}

impl GameConfig {
    pub const fn new(rows: usize, cols: usize, mines: usize) -> Self {
        Self { rows, cols, mines }
    }

    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Check `rows, cols >= 1` and `1 <= mines < rows * cols`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let too_large = ConfigError::BoardTooLarge {
            rows: self.rows,
            cols: self.cols,
            max: MAX_SIDE,
        };
        if self.rows > MAX_SIDE || self.cols > MAX_SIDE {
            return Err(too_large);
        }
        // 32-bit targets can overflow even within MAX_SIDE.
        let cells = self.rows.checked_mul(self.cols).ok_or(too_large)?;
        if self.mines == 0 {
            return Err(ConfigError::NoMines);
        }
        if self.mines >= cells {
            return Err(ConfigError::TooManyMines {
                mines: self.mines,
                cells,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::Beginner.config()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Expert,
    Custom(GameConfig),
}

impl Difficulty {
    /// Starting values offered for a custom board.
    pub const DEFAULT_CUSTOM: GameConfig = GameConfig::new(20, 20, 50);

    pub fn config(&self) -> GameConfig {
        match self {
            Difficulty::Beginner => GameConfig::new(9, 9, 10),
            Difficulty::Intermediate => GameConfig::new(16, 16, 40),
            Difficulty::Expert => GameConfig::new(16, 30, 99),
            Difficulty::Custom(config) => *config,
        }
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}
