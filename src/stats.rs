//! Click statistics and the end-of-game summary.
//!
//! Kept outside [`Game`]: the engine only reports whether an action changed
//! anything, and [`TrackedGame`] turns those answers into counters. An action
//! that changed the board is *active*, one that did nothing is *wasted*.

use std::time::Duration;

use serde::Serialize;

use crate::game::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    /// Reveal.
    Left,
    /// Flag toggle.
    Right,
    Chord,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClickCounter {
    pub active: u32,
    pub wasted: u32,
}

impl ClickCounter {
    pub fn total(&self) -> u32 {
        self.active + self.wasted
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClickStats {
    pub left: ClickCounter,
    pub right: ClickCounter,
    pub chord: ClickCounter,
}

impl ClickStats {
    pub fn record(&mut self, kind: ClickKind, changed: bool) {
        let counter = match kind {
            ClickKind::Left => &mut self.left,
            ClickKind::Right => &mut self.right,
            ClickKind::Chord => &mut self.chord,
        };
        if changed {
            counter.active += 1;
        } else {
            counter.wasted += 1;
        }
    }

    /// Clicks that opened cells: active reveals and active chords.
    pub fn effective_clicks(&self) -> u32 {
        self.left.active + self.chord.active
    }
}

/// A [`Game`] with click accounting in front of it.
#[derive(Debug)]
pub struct TrackedGame {
    game: Game,
    clicks: ClickStats,
}

impl TrackedGame {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            clicks: ClickStats::default(),
        }
    }

    pub fn reveal(&mut self, r: usize, c: usize) -> bool {
        let changed = self.game.reveal(r, c);
        self.clicks.record(ClickKind::Left, changed);
        changed
    }

    pub fn toggle_flag(&mut self, r: usize, c: usize) -> bool {
        let changed = self.game.toggle_flag(r, c);
        self.clicks.record(ClickKind::Right, changed);
        changed
    }

    pub fn chord(&mut self, r: usize, c: usize) -> bool {
        let changed = self.game.chord(r, c);
        self.clicks.record(ClickKind::Chord, changed);
        changed
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The wrapped game, for operations that are not counted (observer
    /// registration, `force_win`).
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn clicks(&self) -> ClickStats {
        self.clicks
    }

    pub fn into_inner(self) -> Game {
        self.game
    }

    pub fn summary(&self, elapsed: Duration) -> GameSummary {
        GameSummary::new(&self.game, &self.clicks, elapsed)
    }
}

/// Figures shown when a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub won: bool,
    #[serde(rename = "threeBV")]
    pub three_bv: u32,
    pub clicks: ClickStats,
    pub elapsed_secs: f64,
    /// 3BV per second. Only for won games with a non-zero time.
    #[serde(rename = "threeBVPerSecond")]
    pub three_bv_per_second: Option<f64>,
    /// 3BV over effective clicks, as a percentage. Only for won games.
    pub efficiency: Option<f64>,
}

impl GameSummary {
    pub fn new(game: &Game, clicks: &ClickStats, elapsed: Duration) -> Self {
        let won = game.is_won();
        let three_bv = game.three_bv();
        let elapsed_secs = elapsed.as_secs_f64();

        let three_bv_per_second =
            (won && elapsed_secs > 0.0).then(|| f64::from(three_bv) / elapsed_secs);
        let effective = clicks.effective_clicks();
        let efficiency =
            (won && effective > 0).then(|| f64::from(three_bv) / f64::from(effective) * 100.0);

        Self {
            won,
            three_bv,
            clicks: *clicks,
            elapsed_secs,
            three_bv_per_second,
            efficiency,
        }
    }
}
