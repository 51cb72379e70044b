use rand::Rng;

use super::Edge;
use crate::*;

/// Opens the facing stubs of both endpoints of every tree edge, producing the solved layout.
pub fn apply_tree(grid: &mut TileGrid, tree: &[Edge]) -> Result<()> {
    for edge in tree {
        let from = grid.validate_coords(edge.from)?;
        let to = grid.validate_coords(edge.to)?;
        let direction = Direction::between(from, to).ok_or(GameError::InvalidCoords)?;
        grid[from].open(direction);
        grid[to].open(direction.opposite());
    }
    Ok(())
}

/// Marks the tile at `coords` as the power source. A grid holds at most one source.
pub fn designate_source(grid: &mut TileGrid, coords: Coord2) -> Result<()> {
    let coords = grid.validate_coords(coords)?;
    if grid.source_count() > 0 {
        return Err(GameError::SourceAlreadyPlaced);
    }
    grid[coords].toggle_source();
    Ok(())
}

/// Gives every tile an independent `0..=3` quarter turns, column by column.
pub fn scramble<R: Rng + ?Sized>(grid: &mut TileGrid, rng: &mut R) {
    for coords in grid.iter_coords() {
        let turns: u8 = rng.gen_range(0..4);
        grid[coords].rotate_clockwise_by(turns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn apply_tree_opens_matching_stubs() {
        let mut grid = TileGrid::new((2, 2));
        let tree = [
            Edge::new((0, 0), (1, 0), 0),
            Edge::new((1, 1), (1, 0), 0),
            Edge::new((0, 1), (0, 0), 0),
        ];
        apply_tree(&mut grid, &tree).unwrap();

        assert_eq!(grid[(0, 0)].wires(), Wires::RIGHT | Wires::DOWN);
        assert_eq!(grid[(1, 0)].wires(), Wires::LEFT | Wires::DOWN);
        assert_eq!(grid[(1, 1)].wires(), Wires::UP);
        assert_eq!(grid[(0, 1)].wires(), Wires::UP);
    }

    #[test]
    fn apply_tree_rejects_non_adjacent_edges() {
        let mut grid = TileGrid::new((3, 3));
        let tree = [Edge::new((0, 0), (2, 0), 0)];
        assert_eq!(apply_tree(&mut grid, &tree), Err(GameError::InvalidCoords));
    }

    #[test]
    fn designate_source_only_once() {
        let mut grid = TileGrid::new((2, 2));
        designate_source(&mut grid, (1, 0)).unwrap();
        assert!(grid[(1, 0)].is_source());
        assert_eq!(grid.source_count(), 1);

        assert_eq!(
            designate_source(&mut grid, (0, 0)),
            Err(GameError::SourceAlreadyPlaced)
        );
        assert_eq!(
            designate_source(&mut grid, (4, 4)),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(grid.source_count(), 1);
    }

    #[test]
    fn scramble_only_rotates() {
        let mut grid = TileGrid::from_rows(&[
            [Wires::RIGHT, Wires::LEFT | Wires::DOWN],
            [Wires::empty(), Wires::UP],
        ])
        .unwrap();
        let before = grid.clone();
        scramble(&mut grid, &mut SmallRng::seed_from_u64(11));

        for coords in grid.iter_coords() {
            let original = before[coords];
            let mut candidate = original;
            let reachable = (0..4).any(|_| {
                candidate.rotate_clockwise();
                candidate == grid[coords]
            });
            assert!(reachable, "{coords:?} is not a rotation of its solved shape");
        }
    }

    #[test]
    fn scramble_draws_one_rotation_per_tile() {
        // the top two bits of each 32-bit draw pick the turn count: 0, 1, 2, 3
        let mut rng = StepRng::new(0, 0x4000_0000);
        let mut grid = TileGrid::from_rows(&[[Wires::UP, Wires::UP, Wires::UP, Wires::UP]]).unwrap();
        scramble(&mut grid, &mut rng);

        assert_eq!(grid[(0, 0)].wires(), Wires::UP);
        assert_eq!(grid[(1, 0)].wires(), Wires::RIGHT);
        assert_eq!(grid[(2, 0)].wires(), Wires::DOWN);
        assert_eq!(grid[(3, 0)].wires(), Wires::LEFT);
    }
}
