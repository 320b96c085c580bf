use crate::cell::Cell;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Orientation of a placed wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A two-edge obstruction anchored at a grid intersection.
///
/// A horizontal wall anchored at `(x, y)` blocks the step between rows
/// `y-1` and `y` for columns `x` and `x+1`. A vertical wall anchored at
/// `(x, y)` blocks the step between columns `x-1` and `x` for rows `y`
/// and `y+1`. Walls are permanent once committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub anchor: Cell,
    pub orientation: Orientation,
}

impl Wall {
    #[inline]
    pub const fn new(anchor: Cell, orientation: Orientation) -> Self {
        Self { anchor, orientation }
    }

    #[inline]
    pub const fn horizontal(x: i32, y: i32) -> Self {
        Self::new(Cell::new(x, y), Orientation::Horizontal)
    }

    #[inline]
    pub const fn vertical(x: i32, y: i32) -> Self {
        Self::new(Cell::new(x, y), Orientation::Vertical)
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.orientation {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        };
        write!(f, "{}{}", self.anchor, tag)
    }
}

/// A candidate move, classified by [`crate::rules::is_legal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Ordinary one-cell orthogonal pawn step.
    Step(Cell),
    /// Straight jump over the adjacent opponent pawn.
    Jump(Cell),
    /// Lateral jump used when the straight jump is shut off.
    DiagonalJump(Cell),
    /// Wall placement, consuming one of the player's remaining walls.
    PlaceWall(Wall),
}
