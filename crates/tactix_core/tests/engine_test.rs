//! End-to-end tests for the engine facade.

use tactix_core::{
    Engine, GameRng, MoveError, Outcome, Player, Position, Square, StartRule,
};

fn board_snapshot(engine: &Engine) -> Vec<Square> {
    Position::ALL.iter().map(|p| engine.square(*p)).collect()
}

#[test]
fn test_fresh_engine_is_in_progress() {
    let engine = Engine::new();
    assert_eq!(engine.outcome(), Outcome::InProgress);
    assert!(Position::ALL.iter().all(|p| engine.square(*p).is_empty()));
    assert_eq!(engine.valid_moves().len(), 9);
}

#[test]
fn test_mark_counts_stay_balanced() {
    // For every prefix of accepted moves, X and O counts differ by 0 or 1.
    let mut engine = Engine::new();
    let moves = [(0, 0), (1, 1), (0, 1), (2, 2), (2, 0), (1, 0)];

    for (row, col) in moves {
        engine.apply_move(row, col).unwrap();
        let x = engine.board().count_of(Player::X);
        let o = engine.board().count_of(Player::O);
        assert!(x.abs_diff(o) <= 1, "counts drifted: X={} O={}", x, o);
    }
}

#[test]
fn test_occupied_square_rejected_without_mutation() {
    let mut engine = Engine::new();
    engine.apply_move(1, 1).unwrap();

    let before = board_snapshot(&engine);
    let result = engine.apply_move(1, 1);

    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(board_snapshot(&engine), before);
}

#[test]
fn test_out_of_range_rejected_without_mutation() {
    let mut engine = Engine::new();
    engine.apply_move(0, 0).unwrap();

    let before = board_snapshot(&engine);
    let turn_before = engine.turn();

    assert_eq!(
        engine.apply_move(3, 1),
        Err(MoveError::OutOfBounds { row: 3, col: 1 })
    );
    assert_eq!(
        engine.apply_move(0, 9),
        Err(MoveError::OutOfBounds { row: 0, col: 9 })
    );
    assert_eq!(board_snapshot(&engine), before);
    assert_eq!(engine.turn(), turn_before);
}

#[test]
fn test_top_row_win() {
    // X: (0,0), (0,1), (0,2); O: (1,1), (2,2).
    let mut engine = Engine::new();

    assert_eq!(engine.apply_move(0, 0), Ok(Outcome::InProgress));
    assert_eq!(engine.apply_move(1, 1), Ok(Outcome::InProgress));
    assert_eq!(engine.apply_move(0, 1), Ok(Outcome::InProgress));
    assert_eq!(engine.apply_move(2, 2), Ok(Outcome::InProgress));
    assert_eq!(engine.apply_move(0, 2), Ok(Outcome::Win(Player::X)));

    assert_eq!(engine.outcome(), Outcome::Win(Player::X));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X, played in a legal order with no earlier line.
    let mut engine = Engine::new();
    let moves = [
        (0, 0), // X
        (0, 1), // O
        (0, 2), // X
        (1, 1), // O
        (1, 0), // X
        (1, 2), // O
        (2, 1), // X
        (2, 0), // O
        (2, 2), // X
    ];

    for (i, (row, col)) in moves.iter().enumerate() {
        let outcome = engine.apply_move(*row, *col).unwrap();
        if i < moves.len() - 1 {
            assert_eq!(outcome, Outcome::InProgress, "premature end at move {}", i);
        } else {
            assert_eq!(outcome, Outcome::Draw);
        }
    }
}

#[test]
fn test_double_click_leaves_turn_unchanged() {
    let mut engine = Engine::new();
    engine.apply_move(0, 0).unwrap();

    let turn_before = engine.turn();
    assert!(matches!(
        engine.apply_move(0, 0),
        Err(MoveError::SquareOccupied(_))
    ));
    assert_eq!(engine.turn(), turn_before);
}

#[test]
fn test_terminal_round_rejects_moves_until_reset() {
    let mut engine = Engine::new();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        engine.apply_move(row, col).unwrap();
    }
    assert!(engine.outcome().is_over());

    let before = board_snapshot(&engine);
    assert_eq!(engine.apply_move(2, 0), Err(MoveError::GameOver));
    assert_eq!(engine.apply_move(1, 0), Err(MoveError::GameOver));
    assert_eq!(board_snapshot(&engine), before);

    engine.reset(None);
    assert_eq!(engine.outcome(), Outcome::InProgress);
    assert_eq!(engine.apply_move(2, 0), Ok(Outcome::InProgress));
}

#[test]
fn test_reset_after_win_empties_board() {
    let mut engine = Engine::new();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        engine.apply_move(row, col).unwrap();
    }
    assert_eq!(engine.outcome(), Outcome::Win(Player::X));

    engine.reset(None);

    for pos in Position::ALL {
        assert_eq!(engine.square(pos), Square::Empty);
    }
    assert_eq!(engine.outcome(), Outcome::InProgress);
    // The turn is a valid mark either way.
    assert!(matches!(engine.turn(), Player::X | Player::O));
}

#[test]
fn test_reset_is_idempotent_in_effect() {
    let mut engine = Engine::with_rule(StartRule::Fixed(Player::X), GameRng::new(0));
    engine.apply_move(1, 1).unwrap();

    engine.reset(None);
    engine.reset(None);
    engine.reset(None);

    assert!(Position::ALL.iter().all(|p| engine.square(*p).is_empty()));
    assert_eq!(engine.outcome(), Outcome::InProgress);
    assert_eq!(engine.turn(), Player::X);
}

#[test]
fn test_diagonal_wins() {
    // Main diagonal for X.
    let mut engine = Engine::new();
    for (row, col) in [(0, 0), (0, 1), (1, 1), (0, 2)] {
        engine.apply_move(row, col).unwrap();
    }
    assert_eq!(engine.apply_move(2, 2), Ok(Outcome::Win(Player::X)));

    // Anti-diagonal for O.
    let mut engine = Engine::new();
    for (row, col) in [(0, 0), (0, 2), (0, 1), (1, 1), (2, 2)] {
        engine.apply_move(row, col).unwrap();
    }
    assert_eq!(engine.apply_move(2, 0), Ok(Outcome::Win(Player::O)));
}

#[test]
fn test_column_win_for_o() {
    let mut engine = Engine::new();
    for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 2)] {
        engine.apply_move(row, col).unwrap();
    }
    // O completes the middle column.
    assert_eq!(engine.apply_move(2, 1), Ok(Outcome::Win(Player::O)));
}

#[test]
fn test_winning_move_still_flips_turn() {
    let mut engine = Engine::new();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
        engine.apply_move(row, col).unwrap();
    }
    assert_eq!(engine.turn(), Player::X);

    engine.apply_move(0, 2).unwrap();
    // X just won; the would-be next mover is O.
    assert_eq!(engine.turn(), Player::O);
}

#[test]
fn test_move_log_tracks_round() {
    let mut engine = Engine::new();
    engine.apply_move(0, 0).unwrap();
    engine.apply_move(1, 1).unwrap();

    let log = engine.move_log();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].player, Player::X);
    assert_eq!(log[0].position, Position::TopLeft);
    assert_eq!(log[1].player, Player::O);
    assert_eq!(log[1].position, Position::Center);

    engine.reset(None);
    assert!(engine.move_log().is_empty());
}
