use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular board of tiles, stored as `[x, y]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Tile>", into = "Array2<Tile>")]
pub struct TileGrid {
    tiles: Array2<Tile>,
}

impl TileGrid {
    /// Board of the given size with every stub closed.
    pub fn new(size: Coord2) -> Self {
        Self {
            tiles: Array2::default(size.to_nd_index()),
        }
    }

    pub fn from_tiles(tiles: Array2<Tile>) -> Result<Self> {
        let (x, y) = tiles.dim();
        let fits = |len: usize| len > 0 && len <= Coord::MAX.into();
        if !fits(x) || !fits(y) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { tiles })
    }

    /// Builds a board from row-major wire shapes, `rows[y][x]`.
    pub fn from_rows<const W: usize>(rows: &[[Wires; W]]) -> Result<Self> {
        let height = rows.len();
        if W == 0 || height == 0 {
            return Err(GameError::InvalidBoardShape);
        }
        Self::from_tiles(Array2::from_shape_fn((W, height), |(x, y)| {
            Tile::new(rows[y][x])
        }))
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.tiles.dim();
        // from_tiles keeps both axes within Coord
        (x as Coord, y as Coord)
    }

    pub fn total_tiles(&self) -> TileCount {
        let (x, y) = self.size();
        mult(x, y)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Column-major walk over every position: all of column 0 top to bottom, then column 1, and so on.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size();
        (0..width).flat_map(move |x| (0..height).map(move |y| (x, y)))
    }

    pub fn neighbor(&self, coords: Coord2, direction: Direction) -> Option<Coord2> {
        direction.step(coords, self.size())
    }

    /// Neighbor on `direction` if both tiles have their facing stubs open.
    pub fn connected_neighbor(&self, coords: Coord2, direction: Direction) -> Option<Coord2> {
        if !self[coords].has(direction) {
            return None;
        }
        let next = self.neighbor(coords, direction)?;
        self[next].has(direction.opposite()).then_some(next)
    }

    /// Dense index used by the union-find, matching the order of [`Self::iter_coords`].
    pub fn index_of(&self, coords: Coord2) -> usize {
        let height = usize::from(self.size().1);
        usize::from(coords.0) * height + usize::from(coords.1)
    }

    pub fn source_count(&self) -> TileCount {
        self.count_tiles(Tile::is_source)
    }

    pub fn lit_count(&self) -> TileCount {
        self.count_tiles(Tile::is_lit)
    }

    pub fn all_lit(&self) -> bool {
        self.tiles.iter().all(Tile::is_lit)
    }

    fn count_tiles(&self, predicate: impl Fn(&Tile) -> bool) -> TileCount {
        // at most Coord::MAX squared tiles
        self.tiles.iter().filter(|tile| predicate(tile)).count() as TileCount
    }
}

impl TryFrom<Array2<Tile>> for TileGrid {
    type Error = GameError;

    fn try_from(tiles: Array2<Tile>) -> Result<Self> {
        Self::from_tiles(tiles)
    }
}

impl From<TileGrid> for Array2<Tile> {
    fn from(grid: TileGrid) -> Self {
        grid.tiles
    }
}

impl Index<Coord2> for TileGrid {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for TileGrid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.tiles[coords.to_nd_index()]
    }
}
