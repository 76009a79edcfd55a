use std::collections::HashSet;

use crate::board::{Board, Point, Visibility, GRID_SIZE};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    Mine,
    /// Number of tiles newly revealed by this call.
    Revealed(usize)
}

/// Reveals `point`, cascading across connected zero-count tiles.
///
/// A flagged target is refused before anything else, mine or not. A mine is
/// reported without touching the board. Flagged tiles are never revealed,
/// neither as the target nor during the cascade.
pub fn reveal(board: &mut Board, point: &Point) -> Result<RevealOutcome, GameError> {
    match board.visibility(point) {
        Visibility::Flagged => return Err(GameError::TileFlagged),
        Visibility::Revealed => return Ok(RevealOutcome::Revealed(0)),
        Visibility::Hidden => {}
    }
    if check_lost(board, point) {
        return Ok(RevealOutcome::Mine)
    }

    let mut visited = HashSet::with_capacity(GRID_SIZE * GRID_SIZE);
    let mut stack = vec![*point];
    visited.insert(*point);
    let mut revealed = 0;

    while let Some(current) = stack.pop() {
        board.set_visibility(&current, Visibility::Revealed);
        revealed += 1;
        if board.adjacent_mine_count(&current) > 0 {
            continue
        }
        for neighbor in board.neighbor_points(&current) {
            // a zero tile has no mine neighbours, so only flags need skipping
            if visited.contains(&neighbor) || !board.visibility(&neighbor).is_hidden() {
                continue
            }
            visited.insert(neighbor);
            stack.push(neighbor);
        }
    }
    log::debug!("revealing {} uncovered {} tiles", point, revealed);
    Ok(RevealOutcome::Revealed(revealed))
}

pub fn check_won(board: &Board) -> bool {
    board.cells()
        .filter(|cell| !cell.is_mine())
        .all(|cell| cell.visibility.is_revealed())
}

pub fn check_lost(board: &Board, point: &Point) -> bool {
    board.is_mine(point)
}

pub fn reveal_all(board: &mut Board) {
    for point in board.points() {
        board.set_visibility(&point, Visibility::Revealed);
    }
}

#[cfg(test)]
use proptest::prelude::*;

#[cfg(test)]
mod reveal_tests {
    use super::*;
    use crate::board::NUM_MINES;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SAFE_TILES: usize = GRID_SIZE * GRID_SIZE - NUM_MINES;

    fn corner_board() -> Board {
        Board::from_mines(&[Point(0, 0)])
    }

    #[test]
    fn revealing_a_mine_loses_and_leaves_board_alone() {
        let mut board = corner_board();
        assert_eq!(reveal(&mut board, &Point(0, 0)), Ok(RevealOutcome::Mine));
        assert!(check_lost(&board, &Point(0, 0)));
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn far_zero_tile_cascades_up_to_the_mine() {
        let mut board = corner_board();
        let outcome = reveal(&mut board, &Point(8, 8));
        assert_eq!(outcome, Ok(RevealOutcome::Revealed(GRID_SIZE * GRID_SIZE - 1)));
        assert!(board.visibility(&Point(0, 1)).is_revealed());
        assert!(board.visibility(&Point(1, 0)).is_revealed());
        assert!(board.visibility(&Point(1, 1)).is_revealed());
        assert!(board.visibility(&Point(0, 0)).is_hidden());
        assert!(check_won(&board));
    }

    #[test]
    fn non_zero_tile_does_not_cascade() {
        let mut board = corner_board();
        assert_eq!(reveal(&mut board, &Point(1, 1)), Ok(RevealOutcome::Revealed(1)));
        assert_eq!(board.revealed_count(), 1);
        assert!(!check_won(&board));
    }

    #[test]
    fn re_revealing_is_a_no_op() {
        let mut board = corner_board();
        reveal(&mut board, &Point(0, 1)).unwrap();
        assert_eq!(reveal(&mut board, &Point(0, 1)), Ok(RevealOutcome::Revealed(0)));
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn flagged_target_is_rejected() {
        let mut board = corner_board();
        board.set_visibility(&Point(4, 4), Visibility::Flagged);
        assert_eq!(reveal(&mut board, &Point(4, 4)), Err(GameError::TileFlagged));
        assert!(board.visibility(&Point(4, 4)).is_flagged());
    }

    #[test]
    fn flagged_mine_is_rejected_not_lost() {
        let mut board = corner_board();
        board.set_visibility(&Point(0, 0), Visibility::Flagged);
        assert_eq!(reveal(&mut board, &Point(0, 0)), Err(GameError::TileFlagged));
        assert!(board.visibility(&Point(0, 0)).is_flagged());
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn cascade_skips_flags() {
        let mut board = corner_board();
        board.set_visibility(&Point(4, 4), Visibility::Flagged);
        board.set_visibility(&Point(0, 1), Visibility::Flagged);
        reveal(&mut board, &Point(8, 8)).unwrap();
        assert!(board.visibility(&Point(4, 4)).is_flagged());
        assert!(board.visibility(&Point(0, 1)).is_flagged());
        assert_eq!(board.revealed_count(), GRID_SIZE * GRID_SIZE - 3);
    }

    #[test]
    fn wall_of_mines_stops_the_cascade() {
        // column 4 is solid mines
        let mines: Vec<Point> = (0..GRID_SIZE).map(|row| Point(row, 4)).collect();
        let mut board = Board::from_mines(&mines);
        reveal(&mut board, &Point(0, 0)).unwrap();
        for point in board.points() {
            let left_side = point.1 < 4;
            assert_eq!(board.visibility(&point).is_revealed(), left_side, "{}", point);
        }
    }

    #[test]
    fn won_iff_every_safe_tile_revealed() {
        let mut board = corner_board();
        for point in board.points() {
            if point != Point(0, 0) && point != Point(5, 5) {
                board.set_visibility(&point, Visibility::Revealed);
            }
        }
        assert!(!check_won(&board));
        board.set_visibility(&Point(5, 5), Visibility::Revealed);
        assert!(check_won(&board));
        board.set_visibility(&Point(0, 0), Visibility::Flagged);
        assert!(check_won(&board));
    }

    #[test]
    fn reveal_all_shows_everything() {
        let mut board = corner_board();
        board.set_visibility(&Point(3, 3), Visibility::Flagged);
        reveal_all(&mut board);
        assert_eq!(board.revealed_count(), GRID_SIZE * GRID_SIZE);
    }

    proptest! {
        #[test]
        fn cascade_boundary_is_numbered(seed in any::<u64>(), x in 0..GRID_SIZE * GRID_SIZE) {
            let mut board = Board::generate(&mut StdRng::seed_from_u64(seed));
            let start = Point::from_integer(x).unwrap();
            prop_assume!(!board.is_mine(&start));
            reveal(&mut board, &start).unwrap();
            for point in board.points() {
                if !board.visibility(&point).is_revealed() {
                    continue
                }
                prop_assert!(!board.is_mine(&point));
                if board.adjacent_mine_count(&point) == 0 {
                    for neighbor in board.neighbor_points(&point) {
                        prop_assert!(board.visibility(&neighbor).is_revealed());
                    }
                }
            }
        }

        #[test]
        fn won_matches_revealed_count(seed in any::<u64>(), picks in proptest::collection::vec(0..GRID_SIZE * GRID_SIZE, 0..60)) {
            let mut board = Board::generate(&mut StdRng::seed_from_u64(seed));
            for x in picks {
                let point = Point::from_integer(x).unwrap();
                if !board.is_mine(&point) {
                    reveal(&mut board, &point).unwrap();
                }
            }
            prop_assert_eq!(check_won(&board), board.revealed_count() == SAFE_TILES);
        }
    }
}
