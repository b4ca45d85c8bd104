//! Mark balance invariant: X and O counts never drift apart.

use super::Invariant;
use crate::round::RoundInProgress;
use crate::types::Player;

/// Invariant: The counts of X and O marks differ by at most one.
///
/// Strict turn alternation makes a larger gap impossible for any
/// sequence of accepted moves.
pub struct MarkBalanceInvariant;

impl Invariant<RoundInProgress> for MarkBalanceInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let x_count = round.board().count_of(Player::X);
        let o_count = round.board().count_of(Player::O);

        x_count.abs_diff(o_count) <= 1
    }

    fn description() -> &'static str {
        "X and O mark counts differ by at most one"
    }
}
