//! Keyboard cursor movement and mouse hit-testing.

use crate::ui::board::{CELL_HEIGHT, CELL_WIDTH};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tactix_core::Position;

/// Moves the cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    use Position::*;

    match (cursor, key) {
        // Right movement
        (TopLeft, KeyCode::Right) => TopCenter,
        (TopCenter, KeyCode::Right) => TopRight,
        (MiddleLeft, KeyCode::Right) => Center,
        (Center, KeyCode::Right) => MiddleRight,
        (BottomLeft, KeyCode::Right) => BottomCenter,
        (BottomCenter, KeyCode::Right) => BottomRight,

        // Left movement
        (TopCenter, KeyCode::Left) => TopLeft,
        (TopRight, KeyCode::Left) => TopCenter,
        (Center, KeyCode::Left) => MiddleLeft,
        (MiddleRight, KeyCode::Left) => Center,
        (BottomCenter, KeyCode::Left) => BottomLeft,
        (BottomRight, KeyCode::Left) => BottomCenter,

        // Down movement
        (TopLeft, KeyCode::Down) => MiddleLeft,
        (TopCenter, KeyCode::Down) => Center,
        (TopRight, KeyCode::Down) => MiddleRight,
        (MiddleLeft, KeyCode::Down) => BottomLeft,
        (Center, KeyCode::Down) => BottomCenter,
        (MiddleRight, KeyCode::Down) => BottomRight,

        // Up movement
        (MiddleLeft, KeyCode::Up) => TopLeft,
        (Center, KeyCode::Up) => TopCenter,
        (MiddleRight, KeyCode::Up) => TopRight,
        (BottomLeft, KeyCode::Up) => MiddleLeft,
        (BottomCenter, KeyCode::Up) => Center,
        (BottomRight, KeyCode::Up) => MiddleRight,

        // No change for other keys or edge cases
        _ => cursor,
    }
}

/// Maps a click at terminal coordinates to a board cell.
///
/// The board is a grid of fixed-size cells with one-character
/// separators between them; a click on a separator or outside the
/// board selects nothing.
pub fn hit_test(column: u16, row: u16, board: Rect) -> Option<Position> {
    if column < board.x || row < board.y {
        return None;
    }

    let x = column - board.x;
    let y = row - board.y;
    if x >= board.width || y >= board.height {
        return None;
    }

    let stride_x = CELL_WIDTH + 1;
    let stride_y = CELL_HEIGHT + 1;
    if x % stride_x >= CELL_WIDTH || y % stride_y >= CELL_HEIGHT {
        return None;
    }

    Position::from_row_col((y / stride_y) as usize, (x / stride_x) as usize)
}
