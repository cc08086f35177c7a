//! Rule based policy for benchmarking the other policies against.
//!
//! Scores the hand on a 0-10 scale (a preflop table before the flop, the
//! evaluator's category after it) and compares it with the price of
//! continuing. Deterministic: the same view always gets the same answer.

use sixmax_engine::cards::Card;
use sixmax_engine::chips::Chips;
use sixmax_engine::hand::{best_of, Category};
use sixmax_engine::logger::Street;
use sixmax_engine::policy::{ActionPolicy, PlayerView};
use sixmax_engine::rules::{Action, ActionKind, LegalActions};

/// Strength-and-pot-odds player.
///
/// **Preflop:** premium pairs and big aces raise, medium hands call a
/// cheap price, weak hands fold to a bet and check when free.
///
/// **Postflop:** two pair or better bets and calls, one pair calls small
/// bets, everything else gives up unless checking is free.
///
/// ```rust
/// use sixmax_ai::baseline::BaselinePolicy;
/// use sixmax_engine::policy::ActionPolicy;
///
/// let p = BaselinePolicy::new();
/// assert_eq!(p.name(), "baseline");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselinePolicy;

impl BaselinePolicy {
    pub fn new() -> Self {
        Self
    }

    /// 9-10 premium (AA-JJ, AKs), 7-8 strong, 5-6 medium, 3-4 marginal,
    /// 0-2 weak offsuit cards.
    fn preflop_strength(hole: [Card; 2]) -> u8 {
        let r1 = hole[0].rank.value();
        let r2 = hole[1].rank.value();
        let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
        let suited = hole[0].suit == hole[1].suit;
        let pick = |s: u8, o: u8| if suited { s } else { o };

        if high == low {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }
        match (high, low) {
            (14, 13) => pick(10, 8),
            (14, 12) => pick(8, 7),
            (14, 11) => pick(7, 6),
            (14, 10) => pick(6, 5),
            (14, _) => pick(5, 4),
            (13, 12) => pick(7, 6),
            (13, 11) => pick(6, 5),
            (13, 10) => pick(5, 4),
            (12, 11) => pick(6, 5),
            (12, 10) => pick(5, 4),
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Category scaled to 0-10 with a point for a queen-or-better top card.
    fn postflop_strength(hole: [Card; 2], board: &[Card]) -> Option<u8> {
        let rank = best_of(&hole, board).ok()?;
        let base = match rank.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush => 10,
        };
        let kicker = u8::from(rank.tiebreak[0] >= 12);
        Some((base + kicker).min(10))
    }

    /// Share of the final pot the call would buy, `pot / (pot + call)`.
    fn pot_odds(pot: Chips, to_call: Chips) -> f64 {
        if to_call.is_zero() {
            return 1.0;
        }
        pot.cents() as f64 / (pot.cents() + to_call.cents()) as f64
    }

    /// Raise to `fraction` of the pot on top of the current bet, clamped by
    /// the engine's bounds.
    fn sized(legal: &LegalActions, max_bet: Chips, pot: Chips, num: u64, den: u64) -> Action {
        let to = max_bet + Chips::from_cents(pot.cents() * num / den);
        Action::Bet(to.clamp(legal.min_raise_to.min(legal.max_raise_to), legal.max_raise_to))
    }

    fn decide_unopened(strength: u8, view: &PlayerView<'_>, legal: &LegalActions) -> Action {
        let can_bet = legal.contains(ActionKind::Bet);
        match strength {
            9..=10 if can_bet => Self::sized(legal, view.max_bet, view.pot, 2, 3),
            7..=8 if can_bet => Self::sized(legal, view.max_bet, view.pot, 1, 2),
            _ => Action::Check,
        }
    }

    fn decide_facing_bet(strength: u8, view: &PlayerView<'_>, legal: &LegalActions) -> Action {
        let to_call = legal.to_call;
        let pot = view.pot;
        // calling would commit the whole stack
        if !legal.contains(ActionKind::Bet) && to_call >= view.stack {
            return if strength >= 7 { Action::Call } else { Action::Fold };
        }
        let odds = Self::pot_odds(pot, to_call);
        let cheap = |div: u64| to_call.cents() <= pot.cents() / div;
        match strength {
            9..=10 if legal.contains(ActionKind::Bet) => Self::sized(legal, view.max_bet, pot, 1, 2),
            7..=10 => Action::Call,
            5..=6 if odds >= 0.3 || cheap(4) => Action::Call,
            3..=4 if odds >= 0.4 || cheap(6) => Action::Call,
            _ => Action::Fold,
        }
    }
}

impl ActionPolicy for BaselinePolicy {
    fn decide(&mut self, view: &PlayerView<'_>, legal: &LegalActions) -> Action {
        let strength = match view.street {
            Street::Preflop => Self::preflop_strength(view.hole_cards),
            _ => Self::postflop_strength(view.hole_cards, view.board)
                .unwrap_or_else(|| Self::preflop_strength(view.hole_cards)),
        };
        if legal.contains(ActionKind::Check) {
            Self::decide_unopened(strength, view, legal)
        } else {
            Self::decide_facing_bet(strength, view, legal)
        }
    }

    fn name(&self) -> &str {
        "baseline"
    }
}
