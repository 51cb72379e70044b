use alloc::vec::Vec;

use super::Edge;
use crate::*;

/// Disjoint sets over dense tile indices.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parents: Vec<usize>,
}

impl UnionFind {
    pub fn new(len: usize) -> Self {
        Self {
            parents: (0..len).collect(),
        }
    }

    pub fn find(&mut self, mut index: usize) -> usize {
        while self.parents[index] != index {
            // path halving
            let grandparent = self.parents[self.parents[index]];
            self.parents[index] = grandparent;
            index = grandparent;
        }
        index
    }

    /// Merges the sets holding `a` and `b`; `false` if they were already one set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parents[root_b] = root_a;
        true
    }
}

/// Minimum spanning tree of a `size` board over `edges`.
///
/// Edges are taken in ascending weight, ties in input order, and an edge is kept only when it
/// joins two different components. Fails with [`GameError::DisconnectedGraph`] when the edges
/// cannot reach every tile.
pub fn kruskal(edges: &[Edge], size: Coord2) -> Result<Vec<Edge>> {
    let grid = TileGrid::new(size);
    let node_count = usize::from(grid.total_tiles());
    let expected = node_count.saturating_sub(1);

    let mut worklist: Vec<Edge> = edges.to_vec();
    worklist.sort_by_key(|edge| edge.weight);

    let mut sets = UnionFind::new(node_count);
    let mut tree = Vec::with_capacity(expected);
    for edge in worklist {
        if tree.len() >= expected {
            break;
        }
        let from = grid.index_of(grid.validate_coords(edge.from)?);
        let to = grid.index_of(grid.validate_coords(edge.to)?);
        if sets.union(from, to) {
            tree.push(edge);
        }
    }

    if tree.len() < expected {
        log::warn!(
            "Spanning tree incomplete, kept {} of {} edges",
            tree.len(),
            expected
        );
        return Err(GameError::DisconnectedGraph {
            kept: tree.len() as TileCount,
            expected: expected as TileCount,
        });
    }

    Ok(tree)
}
