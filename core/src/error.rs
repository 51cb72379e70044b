use thiserror::Error;

use crate::TileCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board already has a power source")]
    SourceAlreadyPlaced,
    #[error("Spanning tree kept {kept} of {expected} edges, candidate graph is disconnected")]
    DisconnectedGraph { kept: TileCount, expected: TileCount },
    #[error("Puzzle already solved, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
