//! Grid points and the Moore neighbourhood.

use std::ops::{Add, Sub};

/// A cell address on the integer grid.
///
/// The second coordinate is the world `z` axis when the grid is sampled from
/// a height map; it grows downward in screen orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell in the given direction.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<GridPoint> for (i32, i32) {
    fn from(p: GridPoint) -> Self {
        (p.x, p.y)
    }
}

impl Add for GridPoint {
    type Output = GridPoint;

    fn add(self, rhs: GridPoint) -> GridPoint {
        GridPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for GridPoint {
    type Output = GridPoint;

    fn sub(self, rhs: GridPoint) -> GridPoint {
        GridPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Moore neighbourhood offsets, clockwise from east (y grows downward).
const OFFSETS: [(i32, i32); 8] = [
    (1, 0),   // 0: east
    (1, 1),   // 1: south-east
    (0, 1),   // 2: south
    (-1, 1),  // 3: south-west
    (-1, 0),  // 4: west
    (-1, -1), // 5: north-west
    (0, -1),  // 6: north
    (1, -1),  // 7: north-east
];

/// One of the 8 neighbour directions, indexed 0..7 clockwise from east.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    /// Direction for an index; wraps modulo 8.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 8]
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        OFFSETS[self as usize]
    }

    /// Rotate clockwise by `steps` eighth turns.
    #[inline]
    pub const fn rotate_cw(self, steps: usize) -> Self {
        Self::from_index(self as usize + steps)
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        self.rotate_cw(4)
    }
}
