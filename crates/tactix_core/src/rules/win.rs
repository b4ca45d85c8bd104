//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player};
use tracing::instrument;

/// The eight winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. All three squares of a line are compared
/// through the same [`crate::types::Square`] value, middle included.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq == board.get(b) && sq == board.get(c) {
            if let Some(player) = sq.player() {
                return Some(player);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn occupy(board: &mut Board, player: Player, positions: &[Position]) {
        for pos in positions {
            board.set(*pos, Square::Occupied(player));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_middle_row() {
        let mut board = Board::new();
        occupy(
            &mut board,
            Player::O,
            &[Position::MiddleLeft, Position::Center, Position::MiddleRight],
        );
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_left_column() {
        let mut board = Board::new();
        occupy(
            &mut board,
            Player::X,
            &[Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
        );
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_main_diagonal() {
        let mut board = Board::new();
        occupy(
            &mut board,
            Player::X,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        occupy(
            &mut board,
            Player::O,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_diagonal_requires_matching_center() {
        // Corners match but the center belongs to the other player.
        let mut board = Board::new();
        occupy(&mut board, Player::X, &[Position::TopLeft, Position::BottomRight]);
        occupy(&mut board, Player::O, &[Position::Center]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        occupy(&mut board, Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(check_winner(&board), None);
    }
}
