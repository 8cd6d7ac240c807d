use salvo::{
    Board, BoardError, Coord, LengthMismatch, Orientation, Placement, ShipKind, ShipLocation,
    FLEET,
};

use Orientation::{Horizontal, Vertical};

fn standard_board() -> Board {
    Board::from_placements(
        10,
        [
            Placement::new(ShipKind::AircraftCarrier, Horizontal, 0, 0),
            Placement::new(ShipKind::Battleship, Vertical, 2, 9),
            Placement::new(ShipKind::Submarine, Horizontal, 4, 2),
            Placement::new(ShipKind::Destroyer, Vertical, 7, 0),
            Placement::new(ShipKind::PatrolBoat, Horizontal, 9, 5),
        ],
    )
    .unwrap()
}

#[test]
fn test_place_records_occupants() {
    let board = standard_board();
    assert_eq!(board.occupant(0, 4), Some(ShipKind::AircraftCarrier));
    assert_eq!(board.occupant(5, 9), Some(ShipKind::Battleship));
    assert_eq!(board.occupant(0, 5), None);
    assert_eq!(board.occupant(10, 0), None);
    assert_eq!(board.occupied().count_ones(), 17);
    assert_eq!(board.placements().len(), 5);
}

#[test]
fn test_place_rejections() {
    let mut board = Board::new(10).unwrap();
    board
        .place(Placement::new(ShipKind::Battleship, Horizontal, 4, 4))
        .unwrap();

    assert_eq!(
        board.place(Placement::new(ShipKind::Battleship, Vertical, 0, 0)),
        Err(BoardError::ShipAlreadyPlaced(ShipKind::Battleship))
    );
    assert_eq!(
        board.place(Placement::new(ShipKind::AircraftCarrier, Horizontal, 0, 6)),
        Err(BoardError::ShipOutOfBounds(ShipKind::AircraftCarrier))
    );
    assert_eq!(
        board.place(Placement::new(ShipKind::Submarine, Vertical, 3, 5)),
        Err(BoardError::ShipOverlaps(ShipKind::Submarine))
    );
    // Side by side, one row below.
    assert_eq!(
        board.place(Placement::new(ShipKind::Destroyer, Horizontal, 5, 4)),
        Err(BoardError::ShipTouches(ShipKind::Destroyer))
    );
    // End to end.
    assert_eq!(
        board.place(Placement::new(ShipKind::PatrolBoat, Horizontal, 4, 8)),
        Err(BoardError::ShipTouches(ShipKind::PatrolBoat))
    );
    // Diagonal corner contact only.
    assert_eq!(
        board.place(Placement::new(ShipKind::PatrolBoat, Vertical, 5, 8)),
        Err(BoardError::ShipTouches(ShipKind::PatrolBoat))
    );
    // One empty cell of separation is fine.
    assert!(board.can_place(&Placement::new(ShipKind::PatrolBoat, Vertical, 6, 8)));
    // Failed attempts leave the board untouched.
    assert_eq!(board.occupied().count_ones(), 4);
}

#[test]
fn test_survey_reports_each_ship_once() {
    let board = standard_board();
    let survey = board.survey();
    assert_eq!(survey.len(), 5);
    assert_eq!(
        survey[0],
        ShipLocation {
            kind: ShipKind::AircraftCarrier,
            start: Coord::new(0, 0),
            end: Coord::new(0, 4),
            length: 5,
        }
    );
    let battleship = survey
        .iter()
        .find(|l| l.kind == ShipKind::Battleship)
        .unwrap();
    assert_eq!(battleship.start, Coord::new(2, 9));
    assert_eq!(battleship.end, Coord::new(5, 9));
    assert_eq!(battleship.length, 4);
    assert!(board.validate(&FLEET).is_empty());
}

#[test]
fn test_validate_reports_missing_ship() {
    let board = Board::from_placements(
        10,
        [Placement::new(ShipKind::PatrolBoat, Vertical, 0, 0)],
    )
    .unwrap();
    let mismatches = board.validate(&[ShipKind::PatrolBoat, ShipKind::Destroyer]);
    assert_eq!(
        mismatches,
        vec![LengthMismatch {
            kind: ShipKind::Destroyer,
            expected: 3,
            actual: 0,
        }]
    );
    assert_eq!(
        mismatches[0].to_string(),
        "Ship length validation failed for Destroyer: expected 3, got 0"
    );
}

#[test]
fn test_board_too_large() {
    assert!(matches!(
        Board::new(12),
        Err(BoardError::BitBoardError(_))
    ));
}

#[test]
fn test_anchor_at_usize_max_is_out_of_bounds() {
    let mut board = Board::new(10).unwrap();
    let across = Placement::new(ShipKind::Submarine, Horizontal, 0, usize::MAX);
    let down = Placement::new(ShipKind::Submarine, Vertical, usize::MAX, 0);
    for p in [across, down] {
        assert!(!p.fits(10));
        assert_eq!(p.checked_end(), None);
        assert!(!board.can_place(&p));
        assert_eq!(board.place(p), Err(BoardError::ShipOutOfBounds(ShipKind::Submarine)));
    }
    assert!(board.placements().is_empty());
    assert_eq!(board.occupied().count_ones(), 0);
}
