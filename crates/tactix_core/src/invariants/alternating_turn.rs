//! Alternating turn invariant: players strictly alternate.

use super::Invariant;
use crate::round::RoundInProgress;

/// Invariant: Players alternate turns.
///
/// The move log must alternate between the two players, and `to_move`
/// must match the parity of the log. The opener is whatever the log's
/// first entry says; either player may open a round.
pub struct AlternatingTurnInvariant;

impl Invariant<RoundInProgress> for AlternatingTurnInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let log = round.log();

        let Some(first) = log.first() else {
            // No moves yet; whoever is to move opened the round.
            return true;
        };

        for window in log.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        // to_move must continue the alternation.
        let expected_next = if log.len() % 2 == 0 {
            first.player
        } else {
            first.player.opponent()
        };

        round.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}
