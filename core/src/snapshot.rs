use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer needs to draw one tile.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileView {
    pub wires: Wires,
    pub lit: bool,
    pub source: bool,
    /// Manhattan distance to the source, for shading lit wire.
    pub distance: TileCount,
}

/// Read-only copy of the player-visible puzzle state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub source: Coord2,
    pub tiles: Array2<TileView>,
    pub score: u32,
    pub elapsed: u32,
    pub state: EngineState,
    pub won: bool,
}

impl Snapshot {
    pub fn from_engine<R>(engine: &PlayEngine<R>) -> Self {
        let board = engine.board();
        let size = board.size();
        let tiles = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            // shape comes from the board, so both indices fit in Coord
            let coords = (x as Coord, y as Coord);
            let tile = board[coords];
            TileView {
                wires: tile.wires(),
                lit: tile.is_lit(),
                source: tile.is_source(),
                distance: engine.source_distance(coords),
            }
        });

        Self {
            size,
            source: engine.source(),
            tiles,
            score: engine.score(),
            elapsed: engine.elapsed(),
            state: engine.state(),
            won: engine.is_won(),
        }
    }

    pub fn tile(&self, coords: Coord2) -> Option<&TileView> {
        self.tiles.get(coords.to_nd_index())
    }

    pub fn lit_count(&self) -> usize {
        self.tiles.iter().filter(|view| view.lit).count()
    }
}
