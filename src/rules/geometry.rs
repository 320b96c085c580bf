//! Stateless wall geometry: edge blocking, overlap/crossing detection and
//! coordinate bounds.
//!
//! These checks are cheap and run before any path search, so malformed or
//! conflicting placements fail fast.

use crate::cell::Cell;
use crate::wall::{Move, Orientation, Wall};

/// True iff `wall` occupies the unit edge between `a` and `b`.
///
/// `a` and `b` must be orthogonally adjacent; any other pair returns
/// false.
pub fn wall_blocks_edge(wall: &Wall, a: Cell, b: Cell) -> bool {
    match (b.x - a.x, b.y - a.y) {
        (1, 0) | (-1, 0) => {
            // Crossing the column boundary left of max(a.x, b.x).
            let boundary = a.x.max(b.x);
            wall.orientation == Orientation::Vertical
                && wall.anchor.x == boundary
                && (wall.anchor.y == a.y || wall.anchor.y == a.y - 1)
        }
        (0, 1) | (0, -1) => {
            let boundary = a.y.max(b.y);
            wall.orientation == Orientation::Horizontal
                && wall.anchor.y == boundary
                && (wall.anchor.x == a.x || wall.anchor.x == a.x - 1)
        }
        _ => false,
    }
}

/// True iff any wall in the set blocks the step between adjacent cells
/// `a` and `b`.
pub fn step_blocked(a: Cell, b: Cell, walls: &[Wall]) -> bool {
    walls.iter().any(|w| wall_blocks_edge(w, a, b))
}

/// True iff `candidate` shares an edge with, or crosses, any existing
/// wall.
pub fn conflicts(candidate: &Wall, walls: &[Wall]) -> bool {
    walls.iter().any(|w| walls_conflict(candidate, w))
}

fn walls_conflict(a: &Wall, b: &Wall) -> bool {
    use Orientation::{Horizontal, Vertical};
    match (a.orientation, b.orientation) {
        // Same orientation: anchors on the same line within one step along
        // the wall's own axis cover a shared edge.
        (Horizontal, Horizontal) => {
            a.anchor.y == b.anchor.y && (a.anchor.x - b.anchor.x).abs() <= 1
        }
        (Vertical, Vertical) => {
            a.anchor.x == b.anchor.x && (a.anchor.y - b.anchor.y).abs() <= 1
        }
        // Opposite orientations cross iff they are centred on the same
        // intersection: a vertical wall at (x, y) meets exactly the
        // horizontal wall anchored at (x-1, y+1). Endpoint contact is
        // legal.
        (Vertical, Horizontal) => {
            b.anchor.x == a.anchor.x - 1 && b.anchor.y == a.anchor.y + 1
        }
        (Horizontal, Vertical) => walls_conflict(b, a),
    }
}

/// Coordinate ranges per move kind. Pawn destinations cover the whole
/// board; wall anchors stop short of the edges their two-cell span would
/// overhang.
pub fn move_in_bounds(mv: &Move) -> bool {
    match *mv {
        Move::Step(to) | Move::Jump(to) | Move::DiagonalJump(to) => to.in_bounds(),
        Move::PlaceWall(wall) => wall_in_bounds(&wall),
    }
}

/// Anchor ranges: horizontal walls `x in [0,7], y in [2,9]`, vertical
/// walls `x in [1,8], y in [1,8]`.
pub fn wall_in_bounds(wall: &Wall) -> bool {
    let Cell { x, y } = wall.anchor;
    match wall.orientation {
        Orientation::Horizontal => (0..=7).contains(&x) && (2..=9).contains(&y),
        Orientation::Vertical => (1..=8).contains(&x) && (1..=8).contains(&y),
    }
}
