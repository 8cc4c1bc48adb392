use thiserror::Error;

/// Rejected board configuration. Gameplay itself never errors; bad moves are
/// silent no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must have at least one row and one column, got {rows}x{cols}")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("board needs at least one mine")]
    NoMines,

    #[error("{mines} mines do not fit on {cells} cells, at least one cell must stay safe")]
    TooManyMines { mines: usize, cells: usize },

    #[error("board dimensions are limited to {max} per side, got {rows}x{cols}")]
    BoardTooLarge { rows: usize, cols: usize, max: usize },
}
