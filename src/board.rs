//! Board generation: mine placement and number calculation.
//!
//! Mines are placed lazily, on the first reveal, so that the clicked cell can
//! be kept clear. `place_mines` picks the exclusion policy, samples until the
//! configured count is reached, then fills in the neighbor counts.

use crate::rng::GameRng;
use crate::types::{Board, NeighborCache};

/// Which cells may not receive a mine during placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionPolicy {
    /// Keep the whole 3x3 block around the click mine-free.
    Neighborhood { r: usize, c: usize },
    /// Keep only the clicked cell mine-free.
    CellOnly { r: usize, c: usize },
    /// Anything goes.
    None,
}

impl ExclusionPolicy {
    /// Choose the policy for a click at `exclude`.
    ///
    /// The 3x3 zone is dropped to a single cell once the board is too dense
    /// for it (`mines >= rows * cols - 9`). `None` for `exclude` lifts the
    /// exclusion entirely.
    pub fn for_board(board: &Board, exclude: Option<(usize, usize)>) -> Self {
        let Some((r, c)) = exclude else {
            return Self::None;
        };
        let total = board.rows() * board.cols();
        if board.mines() + 9 >= total {
            Self::CellOnly { r, c }
        } else {
            Self::Neighborhood { r, c }
        }
    }

    #[inline(always)]
    pub fn allows(&self, r: usize, c: usize) -> bool {
        match *self {
            Self::Neighborhood { r: er, c: ec } => r.abs_diff(er) > 1 || c.abs_diff(ec) > 1,
            Self::CellOnly { r: er, c: ec } => r != er || c != ec,
            Self::None => true,
        }
    }
}

/// Place the board's mines at random, honoring the exclusion around
/// `exclude`, then compute every neighbor count.
///
/// Samples a uniform coordinate until `board.mines()` distinct mines are
/// down. The policy guarantees enough eligible cells for any validated
/// configuration, so the loop always terminates.
pub fn place_mines(
    board: &mut Board,
    exclude: Option<(usize, usize)>,
    neighbor_cache: &NeighborCache,
    rng: &mut GameRng,
) -> ExclusionPolicy {
    let policy = ExclusionPolicy::for_board(board, exclude);
    let rows = board.rows();
    let cols = board.cols();
    let mut placed = 0;

    while placed < board.mines() {
        let r = rng.gen_range(rows);
        let c = rng.gen_range(cols);

        if !policy.allows(r, c) {
            continue;
        }

        let cell = board.get_mut(r, c);
        if !cell.is_mine {
            cell.is_mine = true;
            placed += 1;
        }
    }

    calculate_numbers(board, neighbor_cache);
    policy
}

/// Calculate the neighbor mine counts for all non-mine cells.
///
/// Mine cells keep a count of 0; nothing reads it.
pub fn calculate_numbers(board: &mut Board, neighbor_cache: &NeighborCache) {
    for r in 0..board.rows() {
        for c in 0..board.cols() {
            if board.get(r, c).is_mine {
                continue;
            }

            let count = neighbor_cache
                .get(r, c)
                .iter()
                .filter(|&&(nr, nc)| board.get(nr, nc).is_mine)
                .count();
            board.get_mut(r, c).neighbor_mines = count as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force_count(board: &Board, r: usize, c: usize) -> u8 {
        let mut count = 0;
        for nr in r.saturating_sub(1)..=(r + 1).min(board.rows() - 1) {
            for nc in c.saturating_sub(1)..=(c + 1).min(board.cols() - 1) {
                if (nr, nc) != (r, c) && board.get(nr, nc).is_mine {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_place_mines_count() {
        let mut rng = GameRng::from_seed(42);
        let mut board = Board::new(16, 30, 99);
        let nc = NeighborCache::new(16, 30);
        place_mines(&mut board, Some((8, 15)), &nc, &mut rng);
        assert_eq!(board.count_mines(), 99);
    }

    #[test]
    fn test_place_mines_safe_zone() {
        let nc = NeighborCache::new(10, 10);
        for seed in 0..50 {
            let mut rng = GameRng::from_seed(seed);
            let mut board = Board::new(10, 10, 40);
            let policy = place_mines(&mut board, Some((5, 5)), &nc, &mut rng);
            assert_eq!(policy, ExclusionPolicy::Neighborhood { r: 5, c: 5 });

            for r in 4..=6 {
                for c in 4..=6 {
                    assert!(!board.get(r, c).is_mine, "Mine found in safe zone at ({}, {})", r, c);
                }
            }
            assert_eq!(board.count_mines(), 40);
        }
    }

    #[test]
    fn test_place_mines_corner_click() {
        let nc = NeighborCache::new(9, 9);
        for seed in 0..50 {
            let mut rng = GameRng::from_seed(seed);
            let mut board = Board::new(9, 9, 10);
            place_mines(&mut board, Some((0, 0)), &nc, &mut rng);
            assert_eq!(board.count_mines(), 10);
            for (r, c) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
                assert!(!board.get(r, c).is_mine);
            }
        }
    }

    #[test]
    fn test_dense_board_only_spares_clicked_cell() {
        let nc = NeighborCache::new(5, 5);
        let mut rng = GameRng::from_seed(3);
        // 25 cells, 24 mines: everything except the click.
        let mut board = Board::new(5, 5, 24);
        let policy = place_mines(&mut board, Some((2, 2)), &nc, &mut rng);
        assert_eq!(policy, ExclusionPolicy::CellOnly { r: 2, c: 2 });
        assert_eq!(board.count_mines(), 24);
        assert!(!board.get(2, 2).is_mine);
        assert_eq!(board.get(2, 2).neighbor_mines, 8);
    }

    #[test]
    fn test_dense_threshold() {
        // rows * cols - 9 = 16: the 3x3 zone is dropped from 16 mines up.
        let board = Board::new(5, 5, 15);
        assert!(matches!(
            ExclusionPolicy::for_board(&board, Some((0, 0))),
            ExclusionPolicy::Neighborhood { .. }
        ));
        let board = Board::new(5, 5, 16);
        assert!(matches!(
            ExclusionPolicy::for_board(&board, Some((0, 0))),
            ExclusionPolicy::CellOnly { .. }
        ));
    }

    #[test]
    fn test_no_exclusion_policy() {
        let board = Board::new(3, 3, 8);
        let policy = ExclusionPolicy::for_board(&board, None);
        assert_eq!(policy, ExclusionPolicy::None);
        assert!(policy.allows(0, 0));
        assert!(policy.allows(1, 1));

        let nc = NeighborCache::new(3, 3);
        let mut rng = GameRng::from_seed(11);
        let mut board = Board::new(3, 3, 8);
        place_mines(&mut board, None, &nc, &mut rng);
        assert_eq!(board.count_mines(), 8);
    }

    #[test]
    fn test_neighborhood_policy_allows() {
        let policy = ExclusionPolicy::Neighborhood { r: 0, c: 0 };
        assert!(!policy.allows(1, 1));
        assert!(policy.allows(2, 0));
        assert!(policy.allows(0, 2));
        assert!(policy.allows(1, 2));
    }

    #[test]
    fn test_calculate_numbers_simple() {
        let nc = NeighborCache::new(3, 3);
        let mut board = Board::new(3, 3, 1);
        board.get_mut(1, 1).is_mine = true;

        calculate_numbers(&mut board, &nc);

        for (r, c, cell) in board.iter() {
            if (r, c) != (1, 1) {
                assert_eq!(cell.neighbor_mines, 1);
            }
        }
    }

    #[test]
    fn test_calculate_numbers_corner_mine() {
        let nc = NeighborCache::new(3, 3);
        let mut board = Board::new(3, 3, 1);
        board.get_mut(0, 0).is_mine = true;

        calculate_numbers(&mut board, &nc);

        assert_eq!(board.get(0, 1).neighbor_mines, 1);
        assert_eq!(board.get(1, 0).neighbor_mines, 1);
        assert_eq!(board.get(1, 1).neighbor_mines, 1);
        assert_eq!(board.get(0, 2).neighbor_mines, 0);
        assert_eq!(board.get(2, 2).neighbor_mines, 0);
    }

    #[test]
    fn test_numbers_match_brute_force() {
        let nc = NeighborCache::new(16, 16);
        for seed in 0..10 {
            let mut rng = GameRng::from_seed(seed);
            let mut board = Board::new(16, 16, 40);
            place_mines(&mut board, Some((3, 12)), &nc, &mut rng);
            for (r, c, cell) in board.iter() {
                if !cell.is_mine {
                    assert_eq!(cell.neighbor_mines, brute_force_count(&board, r, c));
                }
            }
        }
    }
}
