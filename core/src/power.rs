use alloc::collections::{BTreeSet, VecDeque};

use crate::*;

/// Positions that currently receive power.
pub type LitSet = BTreeSet<Coord2>;

/// Every tile reachable from `source` through open, mutually facing stubs.
///
/// Safe on arbitrary wiring, cycles included: each tile is enqueued at most once.
pub fn reachable(grid: &TileGrid, source: Coord2) -> Result<LitSet> {
    let source = grid.validate_coords(source)?;

    let mut visited = BTreeSet::from([source]);
    let mut to_visit = VecDeque::from([source]);

    while let Some(visit_coords) = to_visit.pop_front() {
        for direction in grid[visit_coords].wires().directions() {
            let Some(next) = grid.connected_neighbor(visit_coords, direction) else {
                continue;
            };
            if visited.insert(next) {
                to_visit.push_back(next);
            }
        }
    }

    Ok(visited)
}

/// Recomputes the lit flag of every tile from scratch and returns the lit positions.
///
/// The source tile is always lit.
pub fn propagate(grid: &mut TileGrid, source: Coord2) -> Result<LitSet> {
    let lit = reachable(grid, source)?;

    for coords in grid.iter_coords() {
        grid[coords].set_lit(lit.contains(&coords));
    }

    log::trace!(
        "Power from {:?} reaches {} of {} tiles",
        source,
        lit.len(),
        grid.total_tiles()
    );
    Ok(lit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: Wires = Wires::empty();

    #[test]
    fn power_follows_matching_stubs_only() {
        // (0,0) -> (1,0) matched, (1,0) -> (2,0) blocked because (2,0) faces up
        let mut grid = TileGrid::from_rows(&[
            [Wires::RIGHT, Wires::LEFT | Wires::RIGHT, Wires::UP],
            [NONE, NONE, NONE],
        ])
        .unwrap();

        let lit = propagate(&mut grid, (0, 0)).unwrap();

        assert_eq!(lit, LitSet::from([(0, 0), (1, 0)]));
        assert!(grid[(0, 0)].is_lit());
        assert!(grid[(1, 0)].is_lit());
        assert!(!grid[(2, 0)].is_lit());
        assert_eq!(grid.lit_count(), 2);
    }

    #[test]
    fn one_sided_stub_does_not_conduct() {
        let mut grid = TileGrid::from_rows(&[[Wires::RIGHT, NONE]]).unwrap();
        let lit = propagate(&mut grid, (0, 0)).unwrap();
        assert_eq!(lit, LitSet::from([(0, 0)]));

        let mut grid = TileGrid::from_rows(&[[NONE, Wires::LEFT]]).unwrap();
        let lit = propagate(&mut grid, (0, 0)).unwrap();
        assert_eq!(lit, LitSet::from([(0, 0)]));
    }

    #[test]
    fn stubs_facing_the_edge_are_ignored() {
        // a loop whose corner tiles also point off the board
        let mut grid = TileGrid::from_rows(&[
            [Wires::UP | Wires::RIGHT | Wires::DOWN, Wires::LEFT | Wires::DOWN | Wires::RIGHT],
            [Wires::UP | Wires::RIGHT | Wires::LEFT, Wires::UP | Wires::LEFT],
        ])
        .unwrap();

        let lit = propagate(&mut grid, (0, 0)).unwrap();
        assert_eq!(lit, LitSet::from([(0, 0), (0, 1), (1, 0), (1, 1)]));
        assert!(grid.all_lit());
    }

    #[test]
    fn source_is_lit_even_when_isolated() {
        let mut grid = TileGrid::from_rows(&[[NONE, NONE], [NONE, NONE]]).unwrap();
        let lit = propagate(&mut grid, (1, 1)).unwrap();
        assert_eq!(lit, LitSet::from([(1, 1)]));
        assert!(grid[(1, 1)].is_lit());
        assert!(!grid.all_lit());
    }

    #[test]
    fn stale_lit_flags_are_cleared() {
        let mut grid = TileGrid::from_rows(&[[Wires::RIGHT, Wires::LEFT]]).unwrap();
        propagate(&mut grid, (0, 0)).unwrap();
        assert!(grid.all_lit());

        grid[(1, 0)].rotate_clockwise();
        let lit = propagate(&mut grid, (0, 0)).unwrap();
        assert_eq!(lit, LitSet::from([(0, 0)]));
        assert!(!grid[(1, 0)].is_lit());
    }

    #[test]
    fn cycles_terminate() {
        let all = Wires::all();
        let mut grid = TileGrid::from_rows(&[[all, all, all], [all, all, all], [all, all, all]]).unwrap();
        let lit = propagate(&mut grid, (1, 1)).unwrap();
        assert_eq!(lit.len(), 9);
        assert!(grid.all_lit());
    }

    #[test]
    fn propagation_is_idempotent() {
        let mut grid = TileGrid::from_rows(&[
            [Wires::DOWN, Wires::RIGHT | Wires::DOWN, Wires::LEFT],
            [Wires::UP | Wires::RIGHT, Wires::LEFT | Wires::UP, Wires::UP],
        ])
        .unwrap();

        let first = propagate(&mut grid, (0, 0)).unwrap();
        let snapshot = grid.clone();
        let second = propagate(&mut grid, (0, 0)).unwrap();

        assert_eq!(first, second);
        assert_eq!(grid, snapshot);
        assert_eq!(first, reachable(&grid, (0, 0)).unwrap());
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn out_of_range_source_is_an_error() {
        let mut grid = TileGrid::new((2, 2));
        assert_eq!(propagate(&mut grid, (2, 0)), Err(GameError::InvalidCoords));
    }
}
