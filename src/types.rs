//! Core data types for the game engine.
//!
//! All grid types use flat `Vec` storage with row-major layout:
//! `cells[r * cols + c]` maps to the front-end's `board[r][c]`.

use serde::Serialize;

/// Bit-pack (r, c) into a single u32 key, matching JS `(r << 16) | c`.
#[inline(always)]
pub fn cell_key(r: usize, c: usize) -> u32 {
    ((r as u32) << 16) | (c as u32)
}

/// Decode a packed cell key back to (r, c).
#[inline(always)]
pub fn decode_key(key: u32) -> (usize, usize) {
    ((key >> 16) as usize, (key & 0xFFFF) as usize)
}

/// One grid position.
///
/// Invariants kept by [`Board`] and the game: `flagged` implies `!revealed`
/// during play, and `exploded` implies `is_mine && revealed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub is_mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    /// Adjacent mine count, 0-8. Left at 0 for mine cells.
    pub neighbor_mines: u8,
    /// Set only on the mine whose reveal lost the game.
    pub exploded: bool,
}

/// Rectangular grid of cells with fixed dimensions and mine total.
#[derive(Debug, Clone, Serialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    mines: usize,
    cells: Vec<Cell>,
    #[serde(skip)]
    revealed: usize,
}

impl Board {
    /// Create an empty board: no mines placed, everything hidden.
    pub fn new(rows: usize, cols: usize, mines: usize) -> Self {
        Self {
            rows,
            cols,
            mines,
            cells: vec![Cell::default(); rows * cols],
            revealed: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of mines this board is configured for.
    pub fn mines(&self) -> usize {
        self.mines
    }

    /// Number of cells that must be revealed to win.
    pub fn safe_cells(&self) -> usize {
        self.rows * self.cols - self.mines
    }

    #[inline(always)]
    pub fn in_bounds(&self, r: usize, c: usize) -> bool {
        r < self.rows && c < self.cols
    }

    #[inline(always)]
    fn index(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    /// Cell at (r, c). Panics when out of bounds; use [`Board::try_get`] for
    /// caller-supplied coordinates.
    #[inline(always)]
    pub fn get(&self, r: usize, c: usize) -> &Cell {
        &self.cells[self.index(r, c)]
    }

    pub fn try_get(&self, r: usize, c: usize) -> Option<&Cell> {
        if self.in_bounds(r, c) {
            Some(self.get(r, c))
        } else {
            None
        }
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, r: usize, c: usize) -> &mut Cell {
        let idx = self.index(r, c);
        &mut self.cells[idx]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate `(r, c, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / cols, i % cols, cell))
    }

    /// Count of revealed cells, kept in step with [`Board::reveal`].
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Count mines actually placed on the board.
    pub fn count_mines(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_mine).count()
    }

    pub fn count_flags(&self) -> usize {
        self.cells.iter().filter(|cell| cell.flagged).count()
    }

    /// Mark (r, c) revealed. Returns false if it already was.
    pub(crate) fn reveal(&mut self, r: usize, c: usize) -> bool {
        let cell = self.get_mut(r, c);
        if cell.revealed {
            return false;
        }
        cell.revealed = true;
        self.revealed += 1;
        true
    }

    pub(crate) fn set_flagged(&mut self, r: usize, c: usize, flagged: bool) {
        self.get_mut(r, c).flagged = flagged;
    }
}

/// Pre-computed neighbor cache for all cells.
///
/// Stores the 8-directional neighbors (clipped to grid bounds) for every cell.
/// Indexed by `r * cols + c`, each entry is a slice of `(nr, nc)` pairs.
#[derive(Debug, Clone)]
pub struct NeighborCache {
    pub rows: usize,
    pub cols: usize,
    /// Flat storage of all neighbor pairs.
    data: Vec<(usize, usize)>,
    /// offsets[i] = start index in `data` for cell i.
    /// offsets[i+1] - offsets[i] = number of neighbors for cell i.
    offsets: Vec<usize>,
}

impl NeighborCache {
    /// Build the neighbor cache for a grid of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        let total = rows * cols;
        let mut data = Vec::with_capacity(total * 8);
        let mut offsets = Vec::with_capacity(total + 1);

        for r in 0..rows {
            for c in 0..cols {
                offsets.push(data.len());
                for dr in -1i64..=1 {
                    for dc in -1i64..=1 {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        let nr = r as i64 + dr;
                        let nc = c as i64 + dc;
                        if nr >= 0 && nr < rows as i64 && nc >= 0 && nc < cols as i64 {
                            data.push((nr as usize, nc as usize));
                        }
                    }
                }
            }
        }
        offsets.push(data.len()); // sentinel

        Self {
            rows,
            cols,
            data,
            offsets,
        }
    }

    /// Get the pre-computed neighbors for cell (r, c).
    #[inline(always)]
    pub fn get(&self, r: usize, c: usize) -> &[(usize, usize)] {
        let idx = r * self.cols + c;
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.data[start..end]
    }
}
