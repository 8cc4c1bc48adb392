//! 3BV (Bechtel's Board Value): the minimum number of reveal actions that
//! clear a board, counting each opening as one click and every safe cell not
//! bordering an opening as one click.

use std::collections::VecDeque;

use serde::Serialize;

use crate::types::{Board, NeighborCache};

/// Difficulty figures computed once, right after mine placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleStats {
    #[serde(rename = "threeBV")]
    pub three_bv: u32,
}

/// Compute the 3BV of a board whose neighbor counts are already known.
pub fn compute_three_bv(board: &Board, neighbor_cache: &NeighborCache) -> u32 {
    let rows = board.rows();
    let cols = board.cols();
    let mut visited = vec![false; rows * cols];
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    let mut three_bv = 0;

    // Openings: each unvisited zero starts one, absorbing its whole region
    // and the numbered cells around it.
    for r in 0..rows {
        for c in 0..cols {
            let cell = board.get(r, c);
            if cell.is_mine || cell.neighbor_mines != 0 || visited[r * cols + c] {
                continue;
            }

            three_bv += 1;
            visited[r * cols + c] = true;
            queue.push_back((r, c));

            while let Some((cr, cc)) = queue.pop_front() {
                for &(nr, nc) in neighbor_cache.get(cr, cc) {
                    let idx = nr * cols + nc;
                    let neighbor = board.get(nr, nc);
                    if visited[idx] || neighbor.is_mine {
                        continue;
                    }
                    visited[idx] = true;
                    if neighbor.neighbor_mines == 0 {
                        queue.push_back((nr, nc));
                    }
                }
            }
        }
    }

    // Whatever is left is a numbered cell no opening reaches.
    three_bv += board
        .iter()
        .filter(|&(r, c, cell)| !cell.is_mine && !visited[r * cols + c])
        .count() as u32;

    three_bv
}
