//! Neighborhood queries behind chording.
//!
//! A chord on a revealed number opens every hidden, unflagged neighbor once
//! the number of adjacent flags equals the number. Flags are not checked for
//! correctness, so a wrong flag makes the chord hit a mine.

use crate::types::{Board, NeighborCache};

/// Count flagged neighbors of (r, c).
pub fn flagged_neighbors(board: &Board, neighbor_cache: &NeighborCache, r: usize, c: usize) -> usize {
    neighbor_cache
        .get(r, c)
        .iter()
        .filter(|&&(nr, nc)| board.get(nr, nc).flagged)
        .count()
}

/// Hidden, unflagged neighbors of (r, c), in neighbor-cache order.
pub fn chord_targets(
    board: &Board,
    neighbor_cache: &NeighborCache,
    r: usize,
    c: usize,
) -> Vec<(usize, usize)> {
    neighbor_cache
        .get(r, c)
        .iter()
        .copied()
        .filter(|&(nr, nc)| {
            let cell = board.get(nr, nc);
            !cell.revealed && !cell.flagged
        })
        .collect()
}

/// Whether the flag count around a revealed (r, c) matches its number.
pub fn flags_satisfied(board: &Board, neighbor_cache: &NeighborCache, r: usize, c: usize) -> bool {
    flagged_neighbors(board, neighbor_cache, r, c) == board.get(r, c).neighbor_mines as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::calculate_numbers;

    fn setup() -> (Board, NeighborCache) {
        // . * .
        // . . .
        // . . *
        let mut board = Board::new(3, 3, 2);
        board.get_mut(0, 1).is_mine = true;
        board.get_mut(2, 2).is_mine = true;
        let nc = NeighborCache::new(3, 3);
        calculate_numbers(&mut board, &nc);
        board.reveal(1, 1);
        (board, nc)
    }

    #[test]
    fn test_targets_exclude_revealed_and_flagged() {
        let (mut board, nc) = setup();
        board.reveal(1, 0);
        board.set_flagged(0, 1, true);

        let targets = chord_targets(&board, &nc, 1, 1);
        assert_eq!(targets.len(), 6);
        assert!(!targets.contains(&(1, 0)));
        assert!(!targets.contains(&(0, 1)));
        assert!(!targets.contains(&(1, 1)));
    }

    #[test]
    fn test_flag_count_matching() {
        let (mut board, nc) = setup();
        assert_eq!(board.get(1, 1).neighbor_mines, 2);
        assert!(!flags_satisfied(&board, &nc, 1, 1));

        board.set_flagged(0, 1, true);
        assert_eq!(flagged_neighbors(&board, &nc, 1, 1), 1);
        assert!(!flags_satisfied(&board, &nc, 1, 1));

        // Wrong flag still counts.
        board.set_flagged(2, 0, true);
        assert!(flags_satisfied(&board, &nc, 1, 1));
    }
}
