//! Rules core for Quoridor: move legality and the goal-connectivity
//! invariant on the 9x9 board.
//!
//! The crate exposes the rule predicate ([`rules::is_legal`]), the
//! connectivity oracle ([`path::shortest_path`]) and the board state both
//! operate on. Turn bookkeeping, rendering, parsing, persistence and AI
//! move selection live in outer layers and only consult this crate.

pub mod board;
pub mod cell;
pub mod path;
pub mod rules;
pub mod wall;

pub use board::{Board, Player, PlayerState, DEFAULT_WALL_BUDGET};
pub use cell::Cell;
pub use path::{path_to_closer_cell, shortest_path};
pub use rules::{is_legal, Legality, Reason};
pub use wall::{Move, Orientation, Wall};
