use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::chips::Chips;

/// Where a player stands in the current hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Still in the hand and able to act.
    Active,
    /// Out of the hand (or dealt out with an empty stack).
    Folded,
    /// Whole stack committed; in the hand but never asked to act again.
    AllIn,
}

/// A seated player. The seat and stack persist across hands; position,
/// street bet, hole cards and status are reset by [`Player::reset_for_hand`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    seat: usize,
    position: usize,
    stack: Chips,
    bet: Chips,
    hole: Option<[Card; 2]>,
    status: PlayerStatus,
}

impl Player {
    pub fn new(seat: usize, stack: Chips) -> Self {
        Self {
            seat,
            position: 0,
            stack,
            bet: Chips::ZERO,
            hole: None,
            status: PlayerStatus::Folded,
        }
    }

    pub fn seat(&self) -> usize {
        self.seat
    }
    pub fn position(&self) -> usize {
        self.position
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn bet(&self) -> Chips {
        self.bet
    }
    pub fn status(&self) -> PlayerStatus {
        self.status
    }
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole
    }

    /// Folded players and players without cards are out of the hand.
    pub fn in_hand(&self) -> bool {
        self.status != PlayerStatus::Folded && self.hole.is_some()
    }

    /// In the hand and still able to put chips in.
    pub fn can_act(&self) -> bool {
        self.status == PlayerStatus::Active && self.hole.is_some() && !self.stack.is_zero()
    }

    pub(crate) fn reset_for_hand(&mut self, position: usize) {
        self.position = position;
        self.bet = Chips::ZERO;
        self.hole = None;
        self.status = if self.stack.is_zero() {
            PlayerStatus::Folded
        } else {
            PlayerStatus::Active
        };
    }

    pub(crate) fn deal(&mut self, cards: [Card; 2]) {
        self.hole = Some(cards);
    }

    pub(crate) fn fold(&mut self) {
        self.hole = None;
        self.status = PlayerStatus::Folded;
    }

    /// Moves up to `amount` from the stack into the street bet and returns
    /// what actually moved. Emptying the stack marks the player all-in.
    pub(crate) fn commit(&mut self, amount: Chips) -> Chips {
        let moved = amount.min(self.stack);
        self.stack -= moved;
        self.bet += moved;
        if self.stack.is_zero() && self.status == PlayerStatus::Active {
            self.status = PlayerStatus::AllIn;
        }
        moved
    }

    /// Gives back part of this street's bet (an uncalled excess).
    pub(crate) fn refund(&mut self, amount: Chips) {
        let back = amount.min(self.bet);
        self.bet -= back;
        self.stack += back;
        if !back.is_zero() && self.status == PlayerStatus::AllIn {
            self.status = PlayerStatus::Active;
        }
    }

    pub(crate) fn clear_bet(&mut self) {
        self.bet = Chips::ZERO;
    }

    pub fn add_chips(&mut self, amount: Chips) {
        self.stack += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn dealt(stack: u64) -> Player {
        let mut p = Player::new(0, Chips::from_units(stack));
        p.reset_for_hand(3);
        let cards = parse_cards("As Kd").unwrap();
        p.deal([cards[0], cards[1]]);
        p
    }

    #[test]
    fn commit_clamps_to_stack_and_marks_all_in() {
        let mut p = dealt(5);
        let moved = p.commit(Chips::from_units(8));
        assert_eq!(moved, Chips::from_units(5));
        assert_eq!(p.stack(), Chips::ZERO);
        assert_eq!(p.bet(), Chips::from_units(5));
        assert_eq!(p.status(), PlayerStatus::AllIn);
        assert!(p.in_hand());
        assert!(!p.can_act());
    }

    #[test]
    fn refund_reopens_an_all_in_player() {
        let mut p = dealt(5);
        p.commit(Chips::from_units(5));
        p.refund(Chips::from_units(2));
        assert_eq!(p.stack(), Chips::from_units(2));
        assert_eq!(p.status(), PlayerStatus::Active);
    }

    #[test]
    fn busted_player_is_dealt_out() {
        let mut p = Player::new(2, Chips::ZERO);
        p.reset_for_hand(1);
        assert_eq!(p.status(), PlayerStatus::Folded);
        assert!(!p.in_hand());
    }

    #[test]
    fn fold_clears_cards() {
        let mut p = dealt(10);
        p.fold();
        assert!(p.hole_cards().is_none());
        assert!(!p.in_hand());
    }
}
