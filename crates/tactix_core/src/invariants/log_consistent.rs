//! Log consistency invariant: the move log and the board agree.

use super::Invariant;
use crate::round::RoundInProgress;
use crate::types::{Board, Square};

/// Invariant: Replaying the log reproduces the board.
///
/// Every logged move lands on a previously empty square, and the
/// reconstructed board matches the current one. No squares are filled
/// without a log entry, none are overwritten or cleared.
pub struct LogConsistentInvariant;

impl Invariant<RoundInProgress> for LogConsistentInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let mut reconstructed = Board::new();

        for mov in round.log() {
            if reconstructed.get(mov.position) != Square::Empty {
                return false;
            }

            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *round.board()
    }

    fn description() -> &'static str {
        "Replaying the move log reproduces the board"
    }
}
