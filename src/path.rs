//! Connectivity oracle: breadth-first reachability to a goal row with
//! shortest-path reconstruction.
//!
//! Every pawn step costs one, so FIFO expansion visits cells in cost
//! order and the reference's priority queue collapses into a plain queue.
//! Visited bookkeeping is keyed by cell alone in a flat 81-slot array: a
//! cell already enqueued or expanded is never re-enqueued, so the search
//! does at most 81 expansions and always terminates.

use std::collections::VecDeque;

use tracing::trace;

use crate::board::{Board, Player};
use crate::cell::{Cell, ORTHO_STEPS};
use crate::rules::geometry;
use crate::wall::Wall;

const CELLS: usize = 81;

/// Reachability and shortest path for `player` under the committed walls.
///
/// The opponent pawn is ignored: it can always be stepped around or
/// jumped, so it never disconnects a route. The returned path starts at
/// the pawn's current cell, ends on the goal row, and is *a* shortest
/// path by step count (no particular tie-break). `None` means the player
/// is walled off, which is an outcome, not an error.
pub fn shortest_path(player: Player, board: &Board) -> Option<Vec<Cell>> {
    let ps = board.player(player);
    shortest_path_in(ps.pawn(), ps.goal_row(), board.walls())
}

/// Shortest route that brings `player` exactly one row closer to its
/// goal.
///
/// The same search as [`shortest_path`] with a different termination
/// predicate, for forward-progress heuristics in AI callers. `None` when
/// the pawn already stands on its goal row or no closer cell is
/// reachable.
pub fn path_to_closer_cell(player: Player, board: &Board) -> Option<Vec<Cell>> {
    let ps = board.player(player);
    let goal_row = ps.goal_row();
    let target = ps.goal_distance() - 1;
    if target < 0 {
        return None;
    }
    search(ps.pawn(), board.walls(), |c| (c.y - goal_row).abs() == target)
}

/// Oracle over an explicit wall set. The wall-placement probe runs this
/// against a private copy so the live board never has to be touched.
pub(crate) fn shortest_path_in(
    start: Cell,
    goal_row: i32,
    walls: &[Wall],
) -> Option<Vec<Cell>> {
    let found = search(start, walls, |c| c.y == goal_row);
    if found.is_none() {
        trace!(%start, goal_row, "no path to goal row");
    }
    found
}

fn search(start: Cell, walls: &[Wall], is_goal: impl Fn(Cell) -> bool) -> Option<Vec<Cell>> {
    let mut seen = [false; CELLS];
    let mut parent: [Option<Cell>; CELLS] = [None; CELLS];
    let mut queue: VecDeque<Cell> = VecDeque::new();

    seen[start.index()] = true;
    queue.push_back(start);

    while let Some(cur) = queue.pop_front() {
        if is_goal(cur) {
            return Some(reconstruct(cur, start, &parent));
        }
        for (dx, dy) in ORTHO_STEPS {
            let next = cur.offset(dx, dy);
            if !next.in_bounds() || seen[next.index()] {
                continue;
            }
            if geometry::step_blocked(cur, next, walls) {
                continue;
            }
            seen[next.index()] = true;
            parent[next.index()] = Some(cur);
            queue.push_back(next);
        }
    }

    None
}

fn reconstruct(goal: Cell, start: Cell, parent: &[Option<Cell>; CELLS]) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        cur = parent[cur.index()].expect("parent chain reaches the start cell");
        path.push(cur);
    }
    path.reverse();
    path
}
