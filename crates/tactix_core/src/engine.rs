//! Mutable game engine facade over the round typestate.
//!
//! The engine is the authoritative holder of board and turn: all
//! mutation goes through [`Engine::apply_move`] or [`Engine::reset`],
//! and the outcome is derived from the board, never stored on its own.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::rng::GameRng;
use crate::round::{RoundFinished, RoundInProgress, RoundSetup, RoundTransition};
use crate::types::{Board, Outcome, Player, Square};
use tracing::{debug, instrument};

/// Policy for choosing the opening player of each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartRule {
    /// The same mark opens every round.
    Fixed(Player),
    /// The opening mark alternates between rounds.
    Alternate,
    /// The opening mark is drawn from the engine's RNG.
    Random,
}

/// Phase-erased round state held by the engine.
#[derive(Debug, Clone)]
enum Round {
    InProgress(RoundInProgress),
    Finished(RoundFinished),
}

/// Tic-tac-toe game engine.
///
/// Owns the board, the turn, and the starting-turn policy. The engine
/// assumes exclusive, sequential access: every operation is an
/// immediate in-memory computation over the nine squares, and rejected
/// moves leave the board untouched.
#[derive(Debug, Clone)]
pub struct Engine {
    round: Round,
    turn: Player,
    opener: Player,
    rule: StartRule,
    rng: GameRng,
}

impl Engine {
    /// Creates an engine where X opens every round.
    ///
    /// Library users get determinism without opting in; frontends that
    /// want the original coin-flip behavior use [`Engine::with_rule`]
    /// and [`StartRule::Random`].
    pub fn new() -> Self {
        Self::with_rule(StartRule::Fixed(Player::X), GameRng::new(0))
    }

    /// Creates an engine with an explicit start rule and RNG.
    #[instrument(skip(rng))]
    pub fn with_rule(rule: StartRule, mut rng: GameRng) -> Self {
        let opener = match rule {
            StartRule::Fixed(player) => player,
            StartRule::Alternate => Player::X,
            StartRule::Random => rng.flip(),
        };

        debug!(?opener, "engine created");

        Self {
            round: Round::InProgress(RoundSetup::new().start(opener)),
            turn: opener,
            opener,
            rule,
            rng,
        }
    }

    /// Resets the board for a new round.
    ///
    /// Every square becomes empty and the outcome returns to
    /// [`Outcome::InProgress`]. The opening turn comes from the
    /// explicit argument when given, otherwise from the engine's
    /// [`StartRule`]. Calling this repeatedly always yields a fully
    /// empty board with a valid turn.
    #[instrument(skip(self))]
    pub fn reset(&mut self, starting: Option<Player>) {
        let opener = starting.unwrap_or_else(|| self.next_opener());
        self.opener = opener;
        self.turn = opener;
        self.round = Round::InProgress(RoundSetup::new().start(opener));
        debug!(?opener, "round reset");
    }

    /// Applies the current turn's mark at `(row, col)`.
    ///
    /// Preconditions are checked in order: coordinates in range, round
    /// still in progress, square empty. On success the mark is
    /// written, the turn flips, and the freshly derived [`Outcome`] is
    /// returned so callers immediately know whether the round ended.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] when a coordinate is outside 0-2.
    /// - [`MoveError::GameOver`] when the round already ended.
    /// - [`MoveError::SquareOccupied`] when the square is taken.
    ///
    /// The board is untouched on every error path.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.apply(pos)
    }

    /// Applies the current turn's mark at a typed [`Position`].
    ///
    /// Same behavior as [`Engine::apply_move`] minus the coordinate
    /// translation.
    #[instrument(skip(self))]
    pub fn apply(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        let round = match &self.round {
            Round::Finished(_) => return Err(MoveError::GameOver),
            Round::InProgress(round) => round.clone(),
        };

        let action = Move::new(self.turn, pos);
        let next = round.play(action)?;

        // The turn flips on every accepted move, the final one
        // included, so after a win the turn names the would-be next
        // mover.
        self.turn = self.turn.opponent();
        self.round = match next {
            RoundTransition::InProgress(round) => Round::InProgress(round),
            RoundTransition::Finished(round) => Round::Finished(round),
        };

        debug!(outcome = %self.outcome(), "move accepted");
        Ok(self.outcome())
    }

    /// Returns the outcome as of the last accepted move.
    pub fn outcome(&self) -> Outcome {
        match &self.round {
            Round::InProgress(_) => Outcome::InProgress,
            Round::Finished(round) => round.verdict().into(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        match &self.round {
            Round::InProgress(round) => round.board(),
            Round::Finished(round) => round.board(),
        }
    }

    /// Returns the square at a typed position.
    pub fn square(&self, pos: Position) -> Square {
        self.board().get(pos)
    }

    /// Returns the square at `(row, col)`, or `None` when the
    /// coordinates are off the board.
    pub fn square_at(&self, row: usize, col: usize) -> Option<Square> {
        Position::from_row_col(row, col).map(|pos| self.square(pos))
    }

    /// Returns whose mark moves next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the mark that opened the current round.
    pub fn opener(&self) -> Player {
        self.opener
    }

    /// Returns the positions still open for a move. Empty once the
    /// round has finished.
    pub fn valid_moves(&self) -> Vec<Position> {
        match &self.round {
            Round::InProgress(round) => round.valid_moves(),
            Round::Finished(_) => Vec::new(),
        }
    }

    /// Returns the log of accepted moves this round.
    pub fn move_log(&self) -> &[Move] {
        match &self.round {
            Round::InProgress(round) => round.log(),
            Round::Finished(round) => round.log(),
        }
    }

    fn next_opener(&mut self) -> Player {
        match self.rule {
            StartRule::Fixed(player) => player,
            StartRule::Alternate => self.opener.opponent(),
            StartRule::Random => self.rng.flip(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
