//! Square lattice geometry

use serde::{Deserialize, Serialize};

/// Default grid size (cells per side)
pub const GRID_SIZE: i8 = 6;

/// Lattice cell, `(0, 0)` is the top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Check if this cell lies on an `size`x`size` grid
    pub fn is_valid(&self, size: i8) -> bool {
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }

    /// Check if this cell touches the outer border of the grid
    pub fn is_border(&self, size: i8) -> bool {
        self.x == 0 || self.y == 0 || self.x == size - 1 || self.y == size - 1
    }

    /// Neighbor one step in `dir` (may be off the grid)
    pub fn step(&self, dir: Direction) -> Position {
        let (dx, dy) = dir.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance, ignoring edges
    pub fn manhattan(&self, other: Position) -> i8 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// True if the two cells differ by one in exactly one axis
    pub fn is_adjacent(&self, other: Position) -> bool {
        self.manhattan(other) == 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned step direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Fixed exploration order used by move generation and path search
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// (dx, dy); `Up` decreases y
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Direction that leads from `from` to an adjacent `to`
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&d| from.step(d) == to)
    }
}

/// The two points on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Blue => Side::Red,
            Side::Red => Side::Blue,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Blue => write!(f, "blue"),
            Side::Red => write!(f, "red"),
        }
    }
}
