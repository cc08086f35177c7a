use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A 52-card deck dealt from the top. Shuffling draws from the caller's RNG
/// so a seeded stream reproduces the same deal.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Unshuffled deck in suit-major order.
    pub fn new() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
        }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Stacks the deck so the given cards come off the top in order, the
    /// remaining cards following in their default order. Used to replay a
    /// known deal.
    pub fn stacked(top: &[Card]) -> Self {
        let mut cards: Vec<Card> = top.to_vec();
        cards.extend(full_deck().into_iter().filter(|c| !top.contains(c)));
        Self { cards, position: 0 }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards = full_deck();
        self.cards.shuffle(rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Deals one card or reports exhaustion, which a six-seat hand can never
    /// reach.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.deal_card()
            .ok_or_else(|| GameError::Invariant("deck exhausted".into()))
    }

    pub fn burn_card(&mut self) {
        let _ = self.deal_card();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
