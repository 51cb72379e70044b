use alloc::vec::Vec;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;
pub use kruskal::*;
pub use layout::*;
pub use spanning::*;

mod kruskal;
mod layout;
mod spanning;

pub trait LayoutGenerator {
    fn generate<R: Rng + ?Sized>(&self, config: &GameConfig, rng: &mut R)
    -> Result<GeneratedLayout>;
}

/// Connection between two orthogonally adjacent tiles. The weight only orders tree selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: Coord2,
    pub to: Coord2,
    pub weight: u32,
}

impl Edge {
    pub const fn new(from: Coord2, to: Coord2, weight: u32) -> Self {
        Self { from, to, weight }
    }
}

/// Result of one generation pass.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedLayout {
    /// Spanning-tree edges in the order they were kept.
    pub tree: Vec<Edge>,
    /// Board with the tree applied and the source placed, before scrambling.
    pub solved: TileGrid,
    /// Scrambled starting board.
    pub board: TileGrid,
}

/// Every adjacent pair of a `size` board exactly once, weighted from `0..max_weight`.
///
/// Tiles are visited column by column, top to bottom; each emits its down edge and then its right
/// edge, so the weights consume `rng` in a fixed order.
pub fn candidate_edges<R: Rng + ?Sized>(size: Coord2, max_weight: u32, rng: &mut R) -> Vec<Edge> {
    let (width, height) = size;
    let max_weight = max_weight.max(1);
    let mut edges = Vec::with_capacity(2 * usize::from(mult(width, height)));

    for x in 0..width {
        for y in 0..height {
            if y + 1 < height {
                edges.push(Edge::new((x, y), (x, y + 1), rng.gen_range(0..max_weight)));
            }
            if x + 1 < width {
                edges.push(Edge::new((x, y), (x + 1, y), rng.gen_range(0..max_weight)));
            }
        }
    }

    edges
}
