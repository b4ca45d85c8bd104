//! Command-line interface for the tactix TUI.

use clap::{Parser, ValueEnum};
use tactix_core::{GameRng, Player, StartRule};

/// Tactix - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tactix")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who opens the first round
    #[arg(long, value_enum, default_value = "random")]
    pub first: First,

    /// Seed for the opening coin flip (system entropy when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Opening-player policy selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum First {
    /// X opens every round.
    X,
    /// O opens every round.
    O,
    /// The opener alternates between rounds.
    Alternate,
    /// The opener is chosen by coin flip.
    Random,
}

impl Cli {
    /// Start rule selected by the flags.
    pub fn start_rule(&self) -> StartRule {
        match self.first {
            First::X => StartRule::Fixed(Player::X),
            First::O => StartRule::Fixed(Player::O),
            First::Alternate => StartRule::Alternate,
            First::Random => StartRule::Random,
        }
    }

    /// RNG from `--seed`, or entropy when no seed was given.
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
