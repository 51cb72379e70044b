use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::Direction;

bitflags! {
    /// Open wire stubs of a tile. Bits are ordered clockwise so a quarter turn is a 4-bit rotation.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Wires: u8 {
        const UP = 0b0001;
        const RIGHT = 0b0010;
        const DOWN = 0b0100;
        const LEFT = 0b1000;
    }
}

impl Wires {
    pub const fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::UP,
            Direction::Right => Self::RIGHT,
            Direction::Down => Self::DOWN,
            Direction::Left => Self::LEFT,
        }
    }

    pub fn has(self, direction: Direction) -> bool {
        self.contains(Self::from_direction(direction))
    }

    pub fn rotated_clockwise(self) -> Self {
        let bits = self.bits();
        Self::from_bits_truncate((bits << 1) | (bits >> 3))
    }

    pub fn directions(self) -> SmallVec<[Direction; 4]> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.has(direction))
            .collect()
    }
}

impl From<Direction> for Wires {
    fn from(direction: Direction) -> Self {
        Self::from_direction(direction)
    }
}

/// A single grid cell: its open stubs, whether it holds the power source, and whether it is lit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    wires: Wires,
    source: bool,
    lit: bool,
}

impl Tile {
    pub const fn new(wires: Wires) -> Self {
        Self {
            wires,
            source: false,
            lit: false,
        }
    }

    pub const fn wires(&self) -> Wires {
        self.wires
    }

    pub fn has(&self, direction: Direction) -> bool {
        self.wires.has(direction)
    }

    pub fn up(&self) -> bool {
        self.has(Direction::Up)
    }

    pub fn right(&self) -> bool {
        self.has(Direction::Right)
    }

    pub fn down(&self) -> bool {
        self.has(Direction::Down)
    }

    pub fn left(&self) -> bool {
        self.has(Direction::Left)
    }

    pub const fn is_source(&self) -> bool {
        self.source
    }

    pub const fn is_lit(&self) -> bool {
        self.lit
    }

    /// Quarter turn: top goes right, right goes down, down goes left, left goes up.
    pub fn rotate_clockwise(&mut self) {
        self.wires = self.wires.rotated_clockwise();
    }

    pub fn rotate_clockwise_by(&mut self, turns: u8) {
        for _ in 0..turns % 4 {
            self.rotate_clockwise();
        }
    }

    pub fn toggle_source(&mut self) {
        self.source = !self.source;
    }

    pub(crate) fn open(&mut self, direction: Direction) {
        self.wires.insert(direction.into());
    }

    pub(crate) fn set_lit(&mut self, lit: bool) {
        self.lit = lit;
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new(Wires::empty())
    }
}

impl From<Wires> for Tile {
    fn from(wires: Wires) -> Self {
        Self::new(wires)
    }
}
