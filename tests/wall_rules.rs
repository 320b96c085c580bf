use quoridor_rules::{is_legal, Board, Cell, Legality, Move, Player, Reason, Wall};

#[test]
fn wall_anchors_outside_their_range_are_out_of_bounds() {
    let board = Board::new();
    for wall in [
        Wall::horizontal(8, 5),
        Wall::horizontal(4, 1),
        Wall::vertical(0, 4),
        Wall::vertical(4, 9),
    ] {
        assert_eq!(
            is_legal(&Move::PlaceWall(wall), Player::One, &board),
            Legality::Illegal(Reason::OutOfBounds)
        );
    }
}

#[test]
fn duplicate_anchor_is_a_wall_conflict() {
    let mut board = Board::new();
    board.apply(&Move::PlaceWall(Wall::vertical(4, 4)), Player::One);
    assert_eq!(
        is_legal(&Move::PlaceWall(Wall::vertical(4, 4)), Player::Two, &board),
        Legality::Illegal(Reason::WallConflict)
    );
}

#[test]
fn overlapping_anchors_along_the_wall_axis_conflict() {
    let mut board = Board::new();
    board.apply(&Move::PlaceWall(Wall::vertical(4, 4)), Player::One);
    assert_eq!(
        is_legal(&Move::PlaceWall(Wall::vertical(4, 5)), Player::Two, &board),
        Legality::Illegal(Reason::WallConflict)
    );
    assert_eq!(
        is_legal(&Move::PlaceWall(Wall::vertical(4, 3)), Player::Two, &board),
        Legality::Illegal(Reason::WallConflict)
    );
    // Two anchor steps away the spans no longer touch.
    assert_eq!(
        is_legal(&Move::PlaceWall(Wall::vertical(4, 6)), Player::Two, &board),
        Legality::Legal
    );
}

#[test]
fn crossing_at_the_shared_intersection_is_a_wall_conflict() {
    let mut board = Board::new();
    board.apply(&Move::PlaceWall(Wall::vertical(4, 4)), Player::One);
    assert_eq!(
        is_legal(&Move::PlaceWall(Wall::horizontal(3, 5)), Player::Two, &board),
        Legality::Illegal(Reason::WallConflict)
    );
    // Endpoint contact is fine.
    assert_eq!(
        is_legal(&Move::PlaceWall(Wall::horizontal(4, 5)), Player::Two, &board),
        Legality::Legal
    );
}

#[test]
fn exhausted_budget_rejects_before_geometry() {
    let board = Board::from_positions(Cell::new(4, 9), Cell::new(4, 1), 0);
    assert_eq!(
        is_legal(&Move::PlaceWall(Wall::horizontal(4, 5)), Player::One, &board),
        Legality::Illegal(Reason::NoWallsRemaining)
    );
}

#[test]
fn sealing_a_player_in_is_rejected_and_rolled_back() {
    let mut board = Board::new();

    // Build a pocket around Player One's pawn on e9: vertical walls on
    // both sides, then try to close the floor under e9/f9.
    for wall in [Wall::vertical(4, 8), Wall::vertical(6, 8)] {
        assert_eq!(
            is_legal(&Move::PlaceWall(wall), Player::Two, &board),
            Legality::Legal
        );
        board.apply(&Move::PlaceWall(wall), Player::Two);
    }

    let closing = Move::PlaceWall(Wall::horizontal(4, 9));
    assert_eq!(
        is_legal(&closing, Player::Two, &board),
        Legality::Illegal(Reason::WouldTrapPlayer)
    );
    // The probe must leave the committed wall set untouched.
    assert_eq!(board.walls().len(), 2);
}

#[test]
fn probing_the_same_candidate_twice_is_idempotent() {
    let mut board = Board::new();
    for wall in [Wall::vertical(4, 8), Wall::vertical(6, 8)] {
        board.apply(&Move::PlaceWall(wall), Player::Two);
    }

    let trapped = Move::PlaceWall(Wall::horizontal(4, 9));
    let first = is_legal(&trapped, Player::Two, &board);
    let second = is_legal(&trapped, Player::Two, &board);
    assert_eq!(first, second);
    assert_eq!(first, Legality::Illegal(Reason::WouldTrapPlayer));
    assert_eq!(board.walls().len(), 2);

    let open = Move::PlaceWall(Wall::horizontal(0, 5));
    assert_eq!(is_legal(&open, Player::Two, &board), Legality::Legal);
    assert_eq!(is_legal(&open, Player::Two, &board), Legality::Legal);
    assert_eq!(board.walls().len(), 2);
}

#[test]
fn wall_that_merely_lengthens_the_route_is_legal() {
    let mut board = Board::new();
    // A wall directly under Player One's pawn forces a detour but traps
    // nobody.
    let wall = Move::PlaceWall(Wall::horizontal(4, 9));
    assert_eq!(is_legal(&wall, Player::One, &board), Legality::Legal);
    board.apply(&wall, Player::One);
    assert_eq!(board.walls().len(), 1);
    assert_eq!(board.player(Player::One).walls_left(), 9);
}
