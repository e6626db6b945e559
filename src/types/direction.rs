use std::fmt;
use std::fmt::Display;

/// Travel direction of a cabin. Kept across idle periods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    pub fn sign(self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Direction that leads from `from` to `to`. Equal floors count as down.
    pub fn toward(from: u8, to: u8) -> Direction {
        if to > from {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Floor one step away from `floor` in this direction.
    pub fn advance(self, floor: u8) -> u8 {
        match self {
            Direction::Up => floor.saturating_add(1),
            Direction::Down => floor.saturating_sub(1),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}
