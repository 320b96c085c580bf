//! The rule predicate: classifies a candidate move as legal or illegal.
//!
//! Every input resolves to a [`Legality`], never a panic or an error.
//! Wall placements additionally run the anti-stuck probe: the candidate is
//! added to a cloned wall set and the connectivity oracle must find a goal
//! path for both players before the placement counts as legal.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Player};
use crate::cell::Cell;
use crate::path;
use crate::rules::geometry;
use crate::wall::{Move, Wall};

/// Why a candidate move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error, Serialize, Deserialize)]
pub enum Reason {
    #[error("coordinates are outside the board")]
    OutOfBounds,
    #[error("destination is not reachable from the pawn")]
    NotAdjacent,
    #[error("a wall blocks that route")]
    Blocked,
    #[error("destination cell is occupied")]
    Occupied,
    #[error("no walls remaining")]
    NoWallsRemaining,
    #[error("wall overlaps or crosses an existing wall")]
    WallConflict,
    #[error("wall would cut a player off from their goal")]
    WouldTrapPlayer,
}

/// Outcome of a legality query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Legality {
    Legal,
    Illegal(Reason),
}

impl Legality {
    #[inline]
    pub fn is_legal(self) -> bool {
        matches!(self, Legality::Legal)
    }
}

/// The sole entry point for rule checking.
///
/// The board is only read; the speculative wall insertion for the
/// anti-stuck check happens on a private copy of the wall set.
pub fn is_legal(mv: &Move, player: Player, board: &Board) -> Legality {
    let outcome = classify(mv, player, board);
    if let Legality::Illegal(reason) = outcome {
        debug!(?mv, ?player, %reason, "rejected move");
    }
    outcome
}

fn classify(mv: &Move, player: Player, board: &Board) -> Legality {
    if !geometry::move_in_bounds(mv) {
        return Legality::Illegal(Reason::OutOfBounds);
    }
    match *mv {
        Move::Step(to) => check_step(to, player, board),
        Move::Jump(to) => check_jump(to, player, board),
        Move::DiagonalJump(to) => check_diagonal_jump(to, player, board),
        Move::PlaceWall(wall) => check_wall(&wall, player, board),
    }
}

fn check_step(to: Cell, player: Player, board: &Board) -> Legality {
    let pawn = board.player(player).pawn();
    if !pawn.is_adjacent(to) {
        return Legality::Illegal(Reason::NotAdjacent);
    }
    if board.pawn_at(to).is_some() {
        return Legality::Illegal(Reason::Occupied);
    }
    if geometry::step_blocked(pawn, to, board.walls()) {
        return Legality::Illegal(Reason::Blocked);
    }
    Legality::Legal
}

fn check_jump(to: Cell, player: Player, board: &Board) -> Legality {
    let pawn = board.player(player).pawn();
    let other = board.player(player.opponent()).pawn();

    // The opponent must sit exactly between the pawn and the destination.
    let dx = to.x - pawn.x;
    let dy = to.y - pawn.y;
    let straight_two = (dx == 0 && dy.abs() == 2) || (dy == 0 && dx.abs() == 2);
    if !straight_two || other != pawn.offset(dx / 2, dy / 2) {
        return Legality::Illegal(Reason::NotAdjacent);
    }

    if geometry::step_blocked(pawn, other, board.walls())
        || geometry::step_blocked(other, to, board.walls())
    {
        return Legality::Illegal(Reason::Blocked);
    }
    Legality::Legal
}

fn check_diagonal_jump(to: Cell, player: Player, board: &Board) -> Legality {
    let pawn = board.player(player).pawn();
    let other = board.player(player.opponent()).pawn();

    if !pawn.is_adjacent(other) || !other.is_adjacent(to) {
        return Legality::Illegal(Reason::NotAdjacent);
    }
    // Diagonal from the pawn; rules out the pawn's own cell and the cell
    // straight beyond the opponent.
    if (to.x - pawn.x).abs() != 1 || (to.y - pawn.y).abs() != 1 {
        return Legality::Illegal(Reason::NotAdjacent);
    }

    // Only available while the straight jump is shut off, by a wall behind
    // the opponent or by the board edge.
    let beyond = Cell::new(2 * other.x - pawn.x, 2 * other.y - pawn.y);
    let straight_open =
        beyond.in_bounds() && !geometry::step_blocked(other, beyond, board.walls());
    if straight_open {
        return Legality::Illegal(Reason::Blocked);
    }

    if geometry::step_blocked(pawn, other, board.walls())
        || geometry::step_blocked(other, to, board.walls())
    {
        return Legality::Illegal(Reason::Blocked);
    }
    Legality::Legal
}

fn check_wall(wall: &Wall, player: Player, board: &Board) -> Legality {
    if board.player(player).walls_left() == 0 {
        return Legality::Illegal(Reason::NoWallsRemaining);
    }
    if geometry::conflicts(wall, board.walls()) {
        return Legality::Illegal(Reason::WallConflict);
    }

    // Anti-stuck probe on a private copy of the wall set; the shared
    // board is never touched, so there is no rollback to get wrong.
    let mut probe: Vec<Wall> = board.walls().to_vec();
    probe.push(*wall);
    for p in [Player::One, Player::Two] {
        let ps = board.player(p);
        if path::shortest_path_in(ps.pawn(), ps.goal_row(), &probe).is_none() {
            debug!(%wall, trapped = ?p, "wall placement would trap a player");
            return Legality::Illegal(Reason::WouldTrapPlayer);
        }
    }
    Legality::Legal
}
