use serde::{Deserialize, Serialize};
use std::fmt;

/// A board cell: `x` is the column (0 = file a .. 8 = file i), `y` is the
/// row (1..=9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell shifted by `(dx, dy)`. May land off the board.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// True iff the cell lies on the 9x9 board.
    #[inline]
    pub fn in_bounds(self) -> bool {
        (0..=8).contains(&self.x) && (1..=9).contains(&self.y)
    }

    /// Orthogonal adjacency (Manhattan distance 1).
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }

    /// Flat index into an 81-slot array. Only valid for in-bounds cells.
    #[inline]
    pub fn index(self) -> usize {
        (self.y as usize - 1) * 9 + self.x as usize
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            let file = (b'a' + self.x as u8) as char;
            write!(f, "{}{}", file, self.y)
        } else {
            write!(f, "({},{})", self.x, self.y)
        }
    }
}

/// The four orthogonal unit steps, in the expansion order the path search
/// uses.
pub const ORTHO_STEPS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_the_nine_by_nine_board() {
        assert!(Cell::new(0, 1).in_bounds());
        assert!(Cell::new(8, 9).in_bounds());
        assert!(!Cell::new(-1, 5).in_bounds());
        assert!(!Cell::new(9, 5).in_bounds());
        assert!(!Cell::new(4, 0).in_bounds());
        assert!(!Cell::new(4, 10).in_bounds());
    }

    #[test]
    fn adjacency_is_orthogonal_only() {
        let c = Cell::new(4, 5);
        assert!(c.is_adjacent(Cell::new(5, 5)));
        assert!(c.is_adjacent(Cell::new(4, 4)));
        assert!(!c.is_adjacent(Cell::new(5, 6)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Cell::new(4, 7)));
    }

    #[test]
    fn index_is_a_bijection_over_the_board() {
        let mut seen = [false; 81];
        for y in 1..=9 {
            for x in 0..=8 {
                let i = Cell::new(x, y).index();
                assert!(!seen[i]);
                seen[i] = true;
            }
        }
    }

    #[test]
    fn display_uses_file_and_row() {
        assert_eq!(Cell::new(0, 1).to_string(), "a1");
        assert_eq!(Cell::new(4, 9).to_string(), "e9");
        assert_eq!(Cell::new(8, 5).to_string(), "i5");
    }
}
