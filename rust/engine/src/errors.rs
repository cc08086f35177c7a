use thiserror::Error;

use crate::chips::Chips;
use crate::logger::Street;
use crate::rules::Action;

/// A card token that is not exactly `<rank><suit>` with rank in
/// `23456789TJQKA` and suit in `cdhs`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardParseError {
    #[error("card token {0:?} must be exactly 2 characters")]
    Length(String),
    #[error("invalid rank character {0:?}")]
    Rank(char),
    #[error("invalid suit character {0:?}")]
    Suit(char),
}

/// Setup problems, reported before any hand is dealt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("button seat {button} out of range for {seats} seats")]
    ButtonOutOfRange { button: usize, seats: usize },
    #[error("table must have exactly {expected} seats, got {actual}")]
    SeatCount { expected: usize, actual: usize },
    #[error("starting stack must be > 0")]
    NonPositiveStack,
    #[error("blinds must be > 0 with small blind <= big blind (got {small}/{big})")]
    InvalidBlinds { small: Chips, big: Chips },
    #[error("hands must be >= 1")]
    NoHands,
    #[error("invalid chip amount {0:?}")]
    InvalidAmount(String),
    #[error("invalid card: {0}")]
    Card(#[from] CardParseError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("seat {seat} chose {action:?} on the {street:?}, which was not offered")]
    PolicyViolation {
        seat: usize,
        action: Action,
        street: Street,
    },
    #[error("It's not seat {actual}'s turn (expected seat {expected:?})")]
    NotPlayersTurn {
        expected: Option<usize>,
        actual: usize,
    },
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("board must hold 3 to 5 cards, got {0}")]
    BoardSize(usize),
    #[error("fewer than two players have chips")]
    NotEnoughPlayers,
    /// Engine bug. Never retried or masked.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl GameError {
    /// Configuration and policy errors abort the hand and are reported to the
    /// caller; invariant violations are engine bugs.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::Invariant(_))
    }
}
