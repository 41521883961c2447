//! A collection of disk-arm scheduling algorithms.
//!
//! Each algorithm is a pure function consuming an ordered workload and an
//! initial head position and producing a [`Trace`](crate::trace::Trace).
//! An empty workload always yields an empty trace.

pub mod clook;
pub mod cscan;
pub mod fcfs;
pub mod look;
pub mod scan;
pub mod sstf;

mod common;

/// Initial sweep direction of the sweep-based algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher track numbers.
    Up,
    /// Towards lower track numbers.
    Down,
}

impl Direction {
    /// Returns the reversed direction.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(format!("unknown sweep direction: {}", s)),
        }
    }
}
