#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use power::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod grid;
mod power;
mod snapshot;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: Coord2,
    /// Where the power source starts on every fresh board.
    pub source: Coord2,
    /// Candidate edge weights are drawn from `0..max_weight`.
    pub max_weight: u32,
    /// Ticks that make up one unit of elapsed time.
    pub ticks_per_second: u32,
}

impl GameConfig {
    pub const DEFAULT_MAX_WEIGHT: u32 = 25;
    pub const DEFAULT_TICKS_PER_SECOND: u32 = 45;

    pub const fn new_unchecked(size: Coord2) -> Self {
        Self {
            size,
            source: (0, 0),
            max_weight: Self::DEFAULT_MAX_WEIGHT,
            ticks_per_second: Self::DEFAULT_TICKS_PER_SECOND,
        }
    }

    pub fn new((size_x, size_y): Coord2) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        Self::new_unchecked((size_x, size_y))
    }

    pub fn with_source(self, (x, y): Coord2) -> Self {
        let source = (
            x.min(self.size.0.saturating_sub(1)),
            y.min(self.size.1.saturating_sub(1)),
        );
        if source != (x, y) {
            log::warn!("Source {:?} is off the board, moved to {:?}", (x, y), source);
        }
        Self { source, ..self }
    }

    pub fn with_max_weight(self, max_weight: u32) -> Self {
        Self {
            max_weight: max_weight.max(1),
            ..self
        }
    }

    pub fn with_ticks_per_second(self, ticks_per_second: u32) -> Self {
        Self {
            ticks_per_second: ticks_per_second.max(1),
            ..self
        }
    }

    /// Repairs values that may have come from deserialization.
    pub fn sanitized(self) -> Self {
        Self::new(self.size)
            .with_source(self.source)
            .with_max_weight(self.max_weight)
            .with_ticks_per_second(self.ticks_per_second)
    }

    pub const fn total_tiles(&self) -> TileCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((6, 6))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RotateOutcome {
    Rotated,
    Won,
}

impl RotateOutcome {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    Moved,
    Rejected,
}
