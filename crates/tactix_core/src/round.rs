//! Typestate phases for a single round.
//!
//! Each phase is its own distinct type with phase-specific fields,
//! so invalid operations are unrepresentable: a finished round has no
//! `play()` method, and its verdict is always present, not `Option`.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of a finished round.
///
/// The terminal-only refinement of [`Outcome`]: `InProgress` is not a
/// member, so a [`RoundFinished`] always carries a definite result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Player won the round.
    Win(Player),
    /// Round ended in a draw.
    Draw,
}

impl Verdict {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Win(player) => Some(*player),
            Verdict::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Verdict::Draw)
    }
}

impl From<Verdict> for Outcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Win(player) => Outcome::Win(player),
            Verdict::Draw => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Win(player) => write!(f, "Player {} wins", player),
            Verdict::Draw => write!(f, "Draw"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Round in setup phase - ready to start.
///
/// The board is always empty. No log, no verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSetup {
    board: Board,
}

impl RoundSetup {
    /// Creates a new round in setup phase.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the round with the opening player (consumes setup,
    /// returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self, first_player: Player) -> RoundInProgress {
        RoundInProgress {
            board: self.board,
            log: Vec::new(),
            to_move: first_player,
        }
    }
}

impl Default for RoundSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round in progress - can accept moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundInProgress {
    pub(crate) board: Board,
    pub(crate) log: Vec<Move>,
    pub(crate) to_move: Player,
}

impl RoundInProgress {
    /// Plays a move, consuming self and transitioning to the next state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always ([`crate::contracts::LegalMove`])
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the position is taken
    /// and [`MoveError::WrongPlayer`] if the move names the player out
    /// of turn. Rejection happens before any mutation; callers that
    /// want to retry after an error should play on a clone.
    #[instrument(skip(self))]
    pub fn play(self, action: Move) -> Result<RoundTransition, MoveError> {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut round = self;
        round.board.set(action.position, Square::Occupied(action.player));
        round.log.push(action);

        // Winning lines take precedence over fullness.
        if let Some(winner) = rules::check_winner(&round.board) {
            return Ok(RoundTransition::Finished(RoundFinished {
                board: round.board,
                log: round.log,
                verdict: Verdict::Win(winner),
            }));
        }

        if rules::is_full(&round.board) {
            return Ok(RoundTransition::Finished(RoundFinished {
                board: round.board,
                log: round.log,
                verdict: Verdict::Draw,
            }));
        }

        round.to_move = round.to_move.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &round)?;

        Ok(RoundTransition::InProgress(round))
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the log of accepted moves this round.
    pub fn log(&self) -> &[Move] {
        &self.log
    }

    /// Returns the positions still open for a move.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Replays moves from an empty board with the given opener.
    #[instrument]
    pub fn replay(first_player: Player, moves: &[Move]) -> Result<RoundTransition, MoveError> {
        let mut round = RoundSetup::new().start(first_player);

        for action in moves {
            match round.play(*action)? {
                RoundTransition::InProgress(r) => round = r,
                RoundTransition::Finished(r) => return Ok(RoundTransition::Finished(r)),
            }
        }

        Ok(RoundTransition::InProgress(round))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round finished - verdict determined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundFinished {
    board: Board,
    log: Vec<Move>,
    verdict: Verdict,
}

impl RoundFinished {
    /// Returns the verdict.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the log of accepted moves this round.
    pub fn log(&self) -> &[Move] {
        &self.log
    }

    /// Restarts (consumes the finished round, returns an empty setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> RoundSetup {
        RoundSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Type
// ─────────────────────────────────────────────────────────────

/// Result of playing a move.
#[derive(Debug, Clone)]
pub enum RoundTransition {
    /// Round continues.
    InProgress(RoundInProgress),
    /// Round finished.
    Finished(RoundFinished),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_does_not_flip_recorded_board() {
        let moves = [
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopCenter),
            Move::new(Player::O, Position::BottomLeft),
            Move::new(Player::X, Position::TopRight),
        ];

        match RoundInProgress::replay(Player::X, &moves).expect("valid replay") {
            RoundTransition::Finished(round) => {
                assert_eq!(round.verdict(), Verdict::Win(Player::X));
                assert_eq!(round.log().len(), 5);
            }
            RoundTransition::InProgress(_) => panic!("round should be finished"),
        }
    }

    #[test]
    fn test_replay_with_o_opener() {
        let moves = [
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopLeft),
        ];

        match RoundInProgress::replay(Player::O, &moves).expect("valid replay") {
            RoundTransition::InProgress(round) => {
                assert_eq!(round.to_move(), Player::O);
                assert_eq!(round.log().len(), 2);
            }
            RoundTransition::Finished(_) => panic!("round should continue"),
        }
    }

    #[test]
    fn test_ninth_move_without_line_draws() {
        // X O X / X O O / O X X filled in a legal order.
        let moves = [
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::TopCenter),
            Move::new(Player::X, Position::TopRight),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::MiddleLeft),
            Move::new(Player::O, Position::MiddleRight),
            Move::new(Player::X, Position::BottomCenter),
            Move::new(Player::O, Position::BottomLeft),
            Move::new(Player::X, Position::BottomRight),
        ];

        match RoundInProgress::replay(Player::X, &moves).expect("valid replay") {
            RoundTransition::Finished(round) => {
                assert_eq!(round.verdict(), Verdict::Draw);
            }
            RoundTransition::InProgress(_) => panic!("round should be finished"),
        }
    }

    #[test]
    fn test_restart_yields_empty_setup() {
        let moves = [
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopCenter),
            Move::new(Player::O, Position::BottomLeft),
            Move::new(Player::X, Position::TopRight),
        ];

        if let RoundTransition::Finished(round) =
            RoundInProgress::replay(Player::X, &moves).expect("valid replay")
        {
            let setup = round.restart();
            assert!(Position::ALL.iter().all(|p| setup.board().is_empty(*p)));
        } else {
            panic!("round should be finished");
        }
    }
}
