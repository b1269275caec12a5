use super::*;

#[test]
fn test_parse_move_converts_to_zero_based() {
    assert_eq!(parse_move("1 1").unwrap(), Move::new(0, 0));
    assert_eq!(parse_move("2 3").unwrap(), Move::new(1, 2));
    assert_eq!(parse_move("  3,1 \n").unwrap(), Move::new(2, 0));
}

#[test]
fn test_parse_move_rejects_garbage() {
    for input in ["", "1", "a b", "0 1", "4 2", "1 2 3", "-1 2"] {
        assert!(
            matches!(parse_move(input), Err(GameError::ParseMove(_))),
            "accepted {input:?}"
        );
    }
}

#[test]
fn test_move_to_text_is_one_based() {
    assert_eq!(move_to_text(Move::new(0, 2)), "1 3");
    assert_eq!(parse_move(&move_to_text(Move::new(2, 1))).unwrap(), Move::new(2, 1));
}

#[test]
fn test_apply_moves_alternates_sides() {
    let mut pos = Position::empty();
    apply_moves(&mut pos, &["2 2", "1 1", "1 3"]).unwrap();
    assert_eq!(pos.to_notation(), "O.X/.X./...");
    assert_eq!(pos.side_to_move(), Side::O);
}

#[test]
fn test_apply_moves_rejects_occupied_and_finished() {
    let mut pos = Position::empty();
    let err = apply_moves(&mut pos, &["1 1", "1 1"]).unwrap_err();
    assert!(matches!(err, GameError::Occupied(_)));

    let mut pos = Position::from_notation("XXX/OO./...").unwrap();
    let err = apply_moves(&mut pos, &["3 3"]).unwrap_err();
    assert!(matches!(err, GameError::GameOver(Outcome::WonBy(Side::X))));
}
