//! Board evaluation rules: win scan, fullness, outcome derivation.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::types::{Board, Outcome};
use tracing::instrument;

/// Evaluates the board into an [`Outcome`].
///
/// Winning lines are checked before fullness, so a full board that
/// contains a three-in-a-row is a win, never a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return Outcome::Win(winner);
    }

    if is_full(board) {
        return Outcome::Draw;
    }

    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        // X X X / O O X / O X O: full board AND a winning top row.
        // The line must take precedence over fullness.
        let mut board = Board::new();
        for (pos, player) in [
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::O),
        ] {
            board.set(pos, Square::Occupied(player));
        }
        assert_eq!(evaluate(&board), Outcome::Win(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        // X O X / X O O / O X X
        let mut board = Board::new();
        for (pos, player) in [
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::Center, Player::O),
            (Position::MiddleRight, Player::O),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::X),
        ] {
            board.set(pos, Square::Occupied(player));
        }
        assert_eq!(evaluate(&board), Outcome::Draw);
    }
}
