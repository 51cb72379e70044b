use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for tile counts, tree sizes and rotation scores.
pub type TileCount = u16;

/// Two-dimensional coordinates `(x, y)`, that is `(col, row)` with the origin at the top-left.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> TileCount {
    let a = a as TileCount;
    let b = b as TileCount;
    a.saturating_mul(b)
}

/// Manhattan distance between two positions.
pub const fn manhattan(a: Coord2, b: Coord2) -> TileCount {
    (a.0.abs_diff(b.0) as TileCount) + (a.1.abs_diff(b.1) as TileCount)
}

/// One of the four sides of a tile, listed clockwise starting at the top.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            Up => Down,
            Right => Left,
            Down => Up,
            Left => Right,
        }
    }

    pub const fn delta(self) -> (isize, isize) {
        use Direction::*;
        match self {
            Up => (0, -1),
            Right => (1, 0),
            Down => (0, 1),
            Left => (-1, 0),
        }
    }

    /// Neighbor of `coords` on this side, or `None` when it falls outside `bounds`.
    pub fn step(self, coords: Coord2, bounds: Coord2) -> Option<Coord2> {
        apply_delta(coords, self.delta(), bounds)
    }

    /// Direction that leads from `from` to the orthogonally adjacent `to`.
    pub fn between(from: Coord2, to: Coord2) -> Option<Self> {
        use Direction::*;
        let (fx, fy) = from;
        let (tx, ty) = to;
        if fx == tx && fy.checked_sub(1) == Some(ty) {
            Some(Up)
        } else if fx == tx && fy.checked_add(1) == Some(ty) {
            Some(Down)
        } else if fy == ty && fx.checked_sub(1) == Some(tx) {
            Some(Left)
        } else if fy == ty && fx.checked_add(1) == Some(tx) {
            Some(Right)
        } else {
            None
        }
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}
