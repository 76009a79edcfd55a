use thiserror::Error;

/// Actions the engine refuses to apply. None of these change game state.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("This tile is already revealed!")]
    TileRevealed,
    #[error("Cannot reveal a tile that contains a flag")]
    TileFlagged,
    #[error("No flags remaining. Remove a flag before placing another.")]
    NoFlagsRemaining,
    #[error("The round is over, only a replay decision is accepted")]
    RoundOver,
    #[error("The round is still in progress")]
    RoundInProgress,
    #[error("The session has ended")]
    SessionEnded,
}

/// Reasons a line of player input was turned away before reaching the engine.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid input!")]
    Malformed,
    #[error("Please enter a valid input! Row {row} column {col} is off the board.")]
    OutOfRange { row: usize, col: usize },
    #[error("This tile is already revealed!")]
    AlreadyRevealed,
    #[error("Cannot reveal a tile that contains a flag. Enable flag-placing mode and select the tile to remove the flag.")]
    FlaggedTile,
}
