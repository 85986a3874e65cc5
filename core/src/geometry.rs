//! Grid positions and step directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Direction {
    pub x: i64,
    pub y: i64,
}

impl Direction {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The four grid neighbours, in a fixed order.
    pub const CARDINAL: [Direction; 4] = [
        Direction { x: 1,  y: 0  },
        Direction { x: 0,  y: 1  },
        Direction { x: -1, y: 0  },
        Direction { x: 0,  y: -1 },
    ];
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, d: Direction) -> Position {
        Position::new(self.x + d.x, self.y + d.y)
    }
}

impl AddAssign<Direction> for Position {
    fn add_assign(&mut self, d: Direction) {
        *self = *self + d;
    }
}
