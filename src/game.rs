//! The game controller.
//!
//! [`Game`] owns the board and drives everything else: it places mines on the
//! first reveal, runs flood fills and chords, checks for a win after every
//! reveal, and reports each change to the registered [`GameObserver`].
//!
//! Invalid but harmless calls (out-of-range coordinates, moves after the game
//! ended, re-revealing a cell) return `false` and change nothing.

use std::fmt;

use tracing::{debug, info, instrument};

use crate::board::place_mines;
use crate::chord::{chord_targets, flags_satisfied};
use crate::complexity::{compute_three_bv, PuzzleStats};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::events::{GameEvent, GameObserver};
use crate::reveal::flood_fill;
use crate::rng::GameRng;
use crate::types::{Board, Cell, NeighborCache};

/// Lifecycle of a game.
///
/// `Uninitialized -> Active` happens once, on the first reveal (or
/// [`Game::force_win`]), when mines are placed. `Over` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Uninitialized,
    Active,
    Over { won: bool },
}

pub struct Game {
    board: Board,
    neighbors: NeighborCache,
    rng: GameRng,
    phase: GamePhase,
    mines_remaining: i64,
    puzzle_stats: PuzzleStats,
    observer: Option<Box<dyn GameObserver>>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("rows", &self.board.rows())
            .field("cols", &self.board.cols())
            .field("mines", &self.board.mines())
            .field("phase", &self.phase)
            .field("mines_remaining", &self.mines_remaining)
            .field("puzzle_stats", &self.puzzle_stats)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Create a game with mines drawn from system entropy.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new())
    }

    /// Create a game drawing mines from `rng`. Seed it for reproducible boards.
    pub fn with_rng(config: GameConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "Creating new game: {}x{} with {} mines",
            config.rows, config.cols, config.mines
        );
        Ok(Self {
            board: Board::new(config.rows, config.cols, config.mines),
            neighbors: NeighborCache::new(config.rows, config.cols),
            rng,
            phase: GamePhase::Uninitialized,
            mines_remaining: config.mines as i64,
            puzzle_stats: PuzzleStats::default(),
            observer: None,
        })
    }

    /// Register the single observer, replacing any previous one.
    pub fn set_observer<O>(&mut self, observer: O)
    where
        O: GameObserver + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn mine_count(&self) -> usize {
        self.board.mines()
    }

    /// Full board, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, r: usize, c: usize) -> Option<&Cell> {
        self.board.try_get(r, c)
    }

    /// Mines minus flags placed. Negative when over-flagged.
    pub fn mines_remaining(&self) -> i64 {
        self.mines_remaining
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::Over { .. })
    }

    pub fn is_won(&self) -> bool {
        matches!(self.phase, GamePhase::Over { won: true })
    }

    pub fn first_click_done(&self) -> bool {
        self.phase != GamePhase::Uninitialized
    }

    /// 3BV of the board; 0 until mines are placed.
    pub fn three_bv(&self) -> u32 {
        self.puzzle_stats.three_bv
    }

    pub fn puzzle_stats(&self) -> PuzzleStats {
        self.puzzle_stats
    }

    /// Reveal (r, c), flood-filling from zero cells.
    ///
    /// The first reveal of a game places the mines around it. Returns whether
    /// anything changed.
    #[instrument(level = "trace", skip(self))]
    pub fn reveal(&mut self, r: usize, c: usize) -> bool {
        if !self.board.in_bounds(r, c) {
            debug!("Ignoring reveal outside the board at ({}, {})", r, c);
            return false;
        }
        if self.is_game_over() {
            debug!("Ignoring reveal on finished game at ({}, {})", r, c);
            return false;
        }
        let cell = self.board.get(r, c);
        if cell.flagged || cell.revealed {
            debug!("Ignoring reveal on flagged or revealed cell ({}, {})", r, c);
            return false;
        }

        self.start(Some((r, c)));

        self.board.reveal(r, c);
        self.emit(GameEvent::Reveal { r, c });

        let cell = *self.board.get(r, c);
        if cell.is_mine {
            info!("Mine hit at ({}, {}), game over", r, c);
            self.board.get_mut(r, c).exploded = true;
            self.end_game(false);
            return true;
        }

        if cell.neighbor_mines == 0 {
            let observer = &mut self.observer;
            let opened = flood_fill(&mut self.board, &self.neighbors, r, c, |nr, nc| {
                if let Some(observer) = observer.as_mut() {
                    observer.notify(&GameEvent::Reveal { r: nr, c: nc });
                }
            });
            debug!("Flood fill from ({}, {}) opened {} cells", r, c, opened);
        } else {
            debug!("Revealed ({}, {}) with {} adjacent mines", r, c, cell.neighbor_mines);
        }

        self.check_win();
        true
    }

    /// Flag or unflag a hidden cell. Allowed before the first reveal.
    #[instrument(level = "trace", skip(self))]
    pub fn toggle_flag(&mut self, r: usize, c: usize) -> bool {
        if !self.board.in_bounds(r, c) || self.is_game_over() {
            debug!("Ignoring flag action at ({}, {})", r, c);
            return false;
        }
        if self.board.get(r, c).revealed {
            debug!("Ignoring flag action on revealed cell ({}, {})", r, c);
            return false;
        }

        let flagged = !self.board.get(r, c).flagged;
        self.board.set_flagged(r, c, flagged);
        self.mines_remaining += if flagged { -1 } else { 1 };
        debug!("Cell ({}, {}) flagged: {}", r, c, flagged);

        self.emit(GameEvent::Flag { r, c, flagged });
        true
    }

    /// Reveal every hidden, unflagged neighbor of a revealed cell whose flag
    /// count matches its number.
    ///
    /// Flags are trusted as placed: a wrong flag can make the chord open a
    /// mine. Returns whether at least one neighbor was revealed.
    #[instrument(level = "trace", skip(self))]
    pub fn chord(&mut self, r: usize, c: usize) -> bool {
        if !self.board.in_bounds(r, c) || self.is_game_over() || !self.board.get(r, c).revealed {
            debug!("Ignoring chord at ({}, {})", r, c);
            return false;
        }
        if !flags_satisfied(&self.board, &self.neighbors, r, c) {
            debug!("Chord at ({}, {}) does not match its flag count", r, c);
            return false;
        }

        let mut revealed_any = false;
        for (nr, nc) in chord_targets(&self.board, &self.neighbors, r, c) {
            revealed_any |= self.reveal(nr, nc);
        }
        revealed_any
    }

    /// Cells a chord at (r, c) would open, for highlighting.
    ///
    /// Ignores the flag count, so the list may be non-empty for a chord that
    /// would do nothing. Empty unless (r, c) is revealed and the game is live.
    pub fn chord_targets(&self, r: usize, c: usize) -> Vec<(usize, usize)> {
        if !self.board.in_bounds(r, c) || self.is_game_over() || !self.board.get(r, c).revealed {
            return Vec::new();
        }
        chord_targets(&self.board, &self.neighbors, r, c)
    }

    /// Win on the spot: place mines if needed, reveal every safe cell and end
    /// the game. A cheat hook, not part of normal play.
    #[instrument(level = "trace", skip(self))]
    pub fn force_win(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.start(None);

        for r in 0..self.board.rows() {
            for c in 0..self.board.cols() {
                if !self.board.get(r, c).is_mine {
                    self.board.set_flagged(r, c, false);
                    self.board.reveal(r, c);
                }
            }
        }
        info!("Game force-won");
        self.end_game(true);
    }

    /// Place mines once, leaving `exclude` (and around it) clear.
    fn start(&mut self, exclude: Option<(usize, usize)>) {
        if self.phase != GamePhase::Uninitialized {
            return;
        }

        let policy = place_mines(&mut self.board, exclude, &self.neighbors, &mut self.rng);
        self.puzzle_stats = PuzzleStats {
            three_bv: compute_three_bv(&self.board, &self.neighbors),
        };
        self.phase = GamePhase::Active;
        info!(
            "Placed {} mines ({:?}), 3BV {}",
            self.board.mines(),
            policy,
            self.puzzle_stats.three_bv
        );
    }

    fn check_win(&mut self) {
        if self.board.revealed_count() == self.board.safe_cells() {
            self.end_game(true);
        }
    }

    /// The one transition into `Over`.
    fn end_game(&mut self, won: bool) {
        if self.is_game_over() {
            return;
        }
        self.phase = GamePhase::Over { won };

        let rows = self.board.rows();
        let cols = self.board.cols();
        for r in 0..rows {
            for c in 0..cols {
                if !self.board.get(r, c).is_mine {
                    continue;
                }
                if won {
                    self.board.set_flagged(r, c, true);
                } else {
                    self.board.reveal(r, c);
                }
            }
        }

        if won {
            self.mines_remaining = 0;
            info!("Game won! All safe cells revealed.");
        } else {
            info!("Game lost");
        }

        self.emit(GameEvent::GameOver { win: won });
    }

    fn emit(&mut self, event: GameEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.notify(&event);
        }
    }

    /// Build an active game from a picture: `*` is a mine, anything else safe.
    #[cfg(test)]
    pub(crate) fn from_layout(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        let mines = rows.iter().map(|row| row.matches('*').count()).sum();
        let mut game = Self::with_rng(GameConfig::new(height, width, mines), GameRng::from_seed(0))
            .expect("valid layout");
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                game.board.get_mut(r, c).is_mine = ch == '*';
            }
        }
        crate::board::calculate_numbers(&mut game.board, &game.neighbors);
        game.puzzle_stats.three_bv = compute_three_bv(&game.board, &game.neighbors);
        game.phase = GamePhase::Active;
        game
    }
}
