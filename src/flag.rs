use crate::board::{Board, Point, Visibility};
use crate::error::GameError;

pub const NUM_FLAGS: usize = crate::board::NUM_MINES;

/// Flags or unflags `point`, returning the new number of flags remaining.
///
/// Placing a flag needs at least one flag in hand; removing one always works.
pub fn toggle_flag(board: &mut Board, point: &Point, flags_remaining: usize) -> Result<usize, GameError> {
    match board.visibility(point) {
        Visibility::Revealed => Err(GameError::TileRevealed),
        Visibility::Flagged => {
            board.set_visibility(point, Visibility::Hidden);
            Ok(flags_remaining + 1)
        }
        Visibility::Hidden if flags_remaining == 0 => Err(GameError::NoFlagsRemaining),
        Visibility::Hidden => {
            board.set_visibility(point, Visibility::Flagged);
            Ok(flags_remaining - 1)
        }
    }
}

pub fn toggle_mode(flag_placing_mode: bool) -> bool {
    !flag_placing_mode
}

#[cfg(test)]
use proptest::prelude::*;
