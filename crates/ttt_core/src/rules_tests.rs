use super::*;
use crate::types::Cell::{Empty as E, O, X};

#[test]
fn test_row_column_and_diagonal_wins() {
    let cases = [
        ("XXX/OO./...", Side::X),
        ("XO./XO./X..", Side::X),
        ("XO./.XO/..X", Side::X),
        ("XXO/XO./O..", Side::O),
        ("XXO/X.O/..O", Side::O),
    ];
    for (notation, winner) in cases {
        let pos = Position::from_notation(notation).unwrap();
        assert_eq!(classify(&pos), Outcome::WonBy(winner), "{notation}");
    }
}

#[test]
fn test_win_outranks_full_board() {
    let pos = Position::from_notation("XXX/OOX/XOO").unwrap();
    assert!(pos.is_full());
    assert_eq!(classify(&pos), Outcome::WonBy(Side::X));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let pos = Position::from_notation("XOX/XOO/OXX").unwrap();
    assert_eq!(classify(&pos), Outcome::Draw);
}

#[test]
fn test_open_board_is_in_progress() {
    assert_eq!(classify(&Position::empty()), Outcome::InProgress);
    let pos = Position::from_notation("XOX/XOO/OX.").unwrap();
    assert_eq!(classify(&pos), Outcome::InProgress);
}

#[test]
fn test_rows_checked_before_columns() {
    // Not reachable in play, but the scan order decides which line is reported.
    let pos = Position::from_rows([[X, X, X], [O, O, O], [E, E, E]]);
    assert_eq!(classify(&pos), Outcome::WonBy(Side::X));

    let pos = Position::from_rows([[X, X, X], [X, O, O], [X, O, E]]);
    let (_, line) = winning_line(&pos).unwrap();
    assert_eq!(line, [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)]);
}

#[test]
fn test_winning_line_reports_cells() {
    let pos = Position::from_notation("O.X/OX./X..").unwrap();
    let (side, line) = winning_line(&pos).unwrap();
    assert_eq!(side, Side::X);
    assert_eq!(line, [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)]);
}

#[test]
fn test_classify_is_pure() {
    let pos = Position::from_notation("XO./.X./..O").unwrap();
    let before = pos;
    assert_eq!(classify(&pos), classify(&pos));
    assert_eq!(pos, before);
}
