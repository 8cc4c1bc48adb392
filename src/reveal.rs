//! Flood fill for zero-count cells.
//!
//! Breadth-first over an explicit queue, so board size never turns into stack
//! depth. Cells are keyed with [`cell_key`] in the visited set.

use std::collections::{HashSet, VecDeque};

use crate::types::{cell_key, Board, NeighborCache};

/// Expand from an already revealed zero-count cell at (r, c).
///
/// Every hidden, unflagged neighbor of a zero cell in the region is revealed
/// and passed to `on_reveal`; zero-count neighbors are expanded further,
/// numbered ones are not. Returns how many cells were revealed.
pub fn flood_fill<F>(
    board: &mut Board,
    neighbor_cache: &NeighborCache,
    r: usize,
    c: usize,
    mut on_reveal: F,
) -> usize
where
    F: FnMut(usize, usize),
{
    let mut queue: VecDeque<(usize, usize)> = VecDeque::from([(r, c)]);
    let mut visited: HashSet<u32> = HashSet::from([cell_key(r, c)]);
    let mut revealed = 0;

    while let Some((cr, cc)) = queue.pop_front() {
        for &(nr, nc) in neighbor_cache.get(cr, cc) {
            let neighbor = board.get(nr, nc);
            if neighbor.revealed || neighbor.flagged || !visited.insert(cell_key(nr, nc)) {
                continue;
            }

            let expand = neighbor.neighbor_mines == 0;
            board.reveal(nr, nc);
            revealed += 1;
            on_reveal(nr, nc);

            if expand {
                queue.push_back((nr, nc));
            }
        }
    }

    revealed
}
