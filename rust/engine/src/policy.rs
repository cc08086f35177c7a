use crate::cards::Card;
use crate::chips::Chips;
use crate::logger::Street;
use crate::rules::{Action, LegalActions};

/// Read-only view of the table handed to the acting player's policy.
#[derive(Debug, Clone)]
pub struct PlayerView<'a> {
    pub seat: usize,
    pub position: usize,
    pub hole_cards: [Card; 2],
    pub stack: Chips,
    pub bet: Chips,
    pub street: Street,
    pub board: &'a [Card],
    pub pot: Chips,
    pub max_bet: Chips,
    pub big_blind: Chips,
    /// Players still holding cards, this one included
    pub players_in_hand: usize,
}

/// Decision maker for one seat.
///
/// Must return one of `legal.kinds`; anything else aborts the hand with
/// [`GameError::PolicyViolation`](crate::errors::GameError::PolicyViolation).
/// A bet amount is the street total to raise to and is clamped by the
/// engine.
pub trait ActionPolicy {
    fn decide(&mut self, view: &PlayerView<'_>, legal: &LegalActions) -> Action;

    fn name(&self) -> &str;
}

impl<P: ActionPolicy + ?Sized> ActionPolicy for Box<P> {
    fn decide(&mut self, view: &PlayerView<'_>, legal: &LegalActions) -> Action {
        (**self).decide(view, legal)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
