//! Game-state engine for the browser Minesweeper.
//!
//! Owns the board and every rule of play: safe first-click mine placement,
//! flood-fill reveal, chording, win/loss detection and the 3BV difficulty
//! figure. It never draws anything; the front-end reads board snapshots and
//! listens to [`GameEvent`]s.
//!
//! Grids are flat `Vec`s in row-major layout: `cells[r * cols + c]` maps to
//! the JS `board[r][c]`.

pub mod board;
pub mod chord;
pub mod complexity;
pub mod config;
pub mod error;
pub mod events;
pub mod game;
pub mod reveal;
pub mod rng;
pub mod stats;
pub mod types;

pub use complexity::PuzzleStats;
pub use config::{Difficulty, GameConfig};
pub use error::ConfigError;
pub use events::{GameEvent, GameObserver};
pub use game::{Game, GamePhase};
pub use rng::GameRng;
pub use stats::{ClickKind, ClickStats, GameSummary, TrackedGame};
pub use types::{Board, Cell};

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use wasm_bindgen::prelude::*;

    use crate::{Game, GameConfig, GameEvent};

    /// The engine as seen from JavaScript.
    #[wasm_bindgen(js_name = "Game")]
    pub struct WasmGame {
        inner: Game,
    }

    #[wasm_bindgen(js_class = "Game")]
    impl WasmGame {
        /// Throws if the dimensions or mine count are out of range.
        #[wasm_bindgen(constructor)]
        pub fn new(rows: usize, cols: usize, mines: usize) -> Result<WasmGame, JsError> {
            let inner = Game::new(GameConfig::new(rows, cols, mines))?;
            Ok(WasmGame { inner })
        }

        pub fn reveal(&mut self, r: usize, c: usize) -> bool {
            self.inner.reveal(r, c)
        }

        #[wasm_bindgen(js_name = "toggleFlag")]
        pub fn toggle_flag(&mut self, r: usize, c: usize) -> bool {
            self.inner.toggle_flag(r, c)
        }

        pub fn chord(&mut self, r: usize, c: usize) -> bool {
            self.inner.chord(r, c)
        }

        /// `[[r, c], ...]` for highlighting.
        #[wasm_bindgen(js_name = "getChordTargets")]
        pub fn chord_targets(&self, r: usize, c: usize) -> js_sys::Array {
            self.inner
                .chord_targets(r, c)
                .into_iter()
                .map(|(nr, nc)| {
                    js_sys::Array::of2(&JsValue::from(nr as u32), &JsValue::from(nc as u32))
                })
                .collect()
        }

        #[wasm_bindgen(js_name = "forceWin")]
        pub fn force_win(&mut self) {
            self.inner.force_win();
        }

        /// Board snapshot: `{ rows, cols, mines, cells: [{ isMine, revealed, ... }] }`.
        pub fn board(&self) -> Result<JsValue, JsError> {
            Ok(serde_wasm_bindgen::to_value(self.inner.board())?)
        }

        #[wasm_bindgen(getter = minesRemaining)]
        pub fn mines_remaining(&self) -> i32 {
            self.inner.mines_remaining() as i32
        }

        #[wasm_bindgen(getter = gameOver)]
        pub fn game_over(&self) -> bool {
            self.inner.is_game_over()
        }

        #[wasm_bindgen(getter)]
        pub fn won(&self) -> bool {
            self.inner.is_won()
        }

        #[wasm_bindgen(getter = threeBV)]
        pub fn three_bv(&self) -> u32 {
            self.inner.three_bv()
        }

        /// Register `callback(event)`; it receives the `reveal` / `flag` /
        /// `gameOver` objects synchronously during each move.
        #[wasm_bindgen(js_name = "setObserver")]
        pub fn set_observer(&mut self, callback: js_sys::Function) {
            self.inner.set_observer(move |event: &GameEvent| {
                let Ok(value) = serde_wasm_bindgen::to_value(event) else {
                    return;
                };
                let _ = callback.call1(&JsValue::NULL, &value);
            });
        }

        #[wasm_bindgen(js_name = "clearObserver")]
        pub fn clear_observer(&mut self) {
            self.inner.clear_observer();
        }
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "WASM engine ready".to_string()
    }
}
