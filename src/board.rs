use crate::cell::Cell;
use crate::wall::{Move, Wall};
use serde::{Deserialize, Serialize};

/// Wall budget each player starts with under the canonical rules.
pub const DEFAULT_WALL_BUDGET: u8 = 10;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Starts on e9, races toward row 1.
    One,
    /// Starts on e1, races toward row 9.
    Two,
}

impl Player {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Per-player state: pawn location, goal row, remaining walls and the
/// trail of cells the pawn has occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pawn: Cell,
    goal_row: i32,
    walls_left: u8,
    history: Vec<Cell>,
}

impl PlayerState {
    fn new(pawn: Cell, goal_row: i32, walls_left: u8) -> Self {
        Self {
            pawn,
            goal_row,
            walls_left,
            history: vec![pawn],
        }
    }

    #[inline]
    pub fn pawn(&self) -> Cell {
        self.pawn
    }

    #[inline]
    pub fn goal_row(&self) -> i32 {
        self.goal_row
    }

    #[inline]
    pub fn walls_left(&self) -> u8 {
        self.walls_left
    }

    /// Every cell the pawn has occupied, oldest first. Kept so an outer
    /// layer can implement undo; nothing in the rules reads it.
    pub fn history(&self) -> &[Cell] {
        &self.history
    }

    /// Rows between the pawn and its goal row. Zero means the player has
    /// won.
    #[inline]
    pub fn goal_distance(&self) -> i32 {
        (self.pawn.y - self.goal_row).abs()
    }
}

/// The authoritative position: both players plus the committed walls.
///
/// The rules modules only ever read this; the wall-placement probe runs on
/// a cloned wall set, so a `Board` is never mutated mid-query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    players: [PlayerState; 2],
    walls: Vec<Wall>,
}

impl Board {
    /// The canonical initial position: Player One on e9 heading for row 1,
    /// Player Two on e1 heading for row 9, ten walls each.
    pub fn new() -> Self {
        Self::with_wall_budget(DEFAULT_WALL_BUDGET)
    }

    /// Initial position with a non-standard wall budget.
    pub fn with_wall_budget(walls: u8) -> Self {
        Self {
            players: [
                PlayerState::new(Cell::new(4, 9), 1, walls),
                PlayerState::new(Cell::new(4, 1), 9, walls),
            ],
            walls: Vec::new(),
        }
    }

    /// A board with explicit pawn positions and an empty wall set. Goal
    /// rows stay canonical (One toward row 1, Two toward row 9). Intended
    /// for analysis tooling and tests that need a mid-game position.
    pub fn from_positions(one: Cell, two: Cell, walls_left: u8) -> Self {
        Self {
            players: [
                PlayerState::new(one, 1, walls_left),
                PlayerState::new(two, 9, walls_left),
            ],
            walls: Vec::new(),
        }
    }

    #[inline]
    pub fn player(&self, p: Player) -> &PlayerState {
        match p {
            Player::One => &self.players[0],
            Player::Two => &self.players[1],
        }
    }

    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// The player whose pawn sits on `cell`, if any.
    pub fn pawn_at(&self, cell: Cell) -> Option<Player> {
        if self.players[0].pawn == cell {
            Some(Player::One)
        } else if self.players[1].pawn == cell {
            Some(Player::Two)
        } else {
            None
        }
    }

    /// The player standing on their goal row, if any.
    pub fn winner(&self) -> Option<Player> {
        if self.players[0].goal_distance() == 0 {
            Some(Player::One)
        } else if self.players[1].goal_distance() == 0 {
            Some(Player::Two)
        } else {
            None
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Commits a move that was already confirmed legal.
    ///
    /// Validation is the validator's job alone; feeding this an
    /// unvalidated move leaves the position meaningless.
    pub fn apply(&mut self, mv: &Move, player: Player) {
        match *mv {
            Move::Step(to) | Move::Jump(to) | Move::DiagonalJump(to) => {
                let ps = self.player_mut(player);
                ps.pawn = to;
                ps.history.push(to);
            }
            Move::PlaceWall(wall) => {
                let ps = self.player_mut(player);
                debug_assert!(ps.walls_left > 0, "wall placement without budget");
                ps.walls_left = ps.walls_left.saturating_sub(1);
                self.walls.push(wall);
            }
        }
    }

    fn player_mut(&mut self, p: Player) -> &mut PlayerState {
        match p {
            Player::One => &mut self.players[0],
            Player::Two => &mut self.players[1],
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
