#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use sixmax_engine::cards::{full_deck, parse_cards, Card};
use sixmax_engine::chips::Chips;
use sixmax_engine::deck::Deck;
use sixmax_engine::player::Player;
use sixmax_engine::policy::{ActionPolicy, PlayerView};
use sixmax_engine::rules::{Action, ActionKind, LegalActions};

pub fn units(n: u64) -> Chips {
    Chips::from_units(n)
}

pub fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("test cards parse")
}

pub fn hole(s: &str) -> [Card; 2] {
    let v = cards(s);
    [v[0], v[1]]
}

/// Six players with the given stacks in units, seat order.
pub fn table(stacks: [u64; 6]) -> Vec<Player> {
    stacks
        .iter()
        .enumerate()
        .map(|(seat, &s)| Player::new(seat, units(s)))
        .collect()
}

pub fn full_table() -> Vec<Player> {
    table([100; 6])
}

/// Deck that deals `holes[seat]` to every seat and `board` as the five
/// community cards, assuming the button is seat 0 and all six are dealt in.
pub fn stacked_deck(holes: [&str; 6], board: &str) -> Deck {
    let holes: Vec<[Card; 2]> = holes.iter().map(|h| hole(h)).collect();
    let board = cards(board);
    assert_eq!(board.len(), 5);
    let mut used: Vec<Card> = holes.iter().flatten().copied().collect();
    used.extend(&board);
    let mut burns = full_deck().into_iter().filter(|c| !used.contains(c));

    // dealing order from the small blind back to the button
    let order = [1, 2, 3, 4, 5, 0];
    let mut top = Vec::with_capacity(21);
    for round in 0..2 {
        for &seat in &order {
            top.push(holes[seat][round]);
        }
    }
    top.push(burns.next().unwrap());
    top.extend(&board[..3]);
    top.push(burns.next().unwrap());
    top.push(board[3]);
    top.push(burns.next().unwrap());
    top.push(board[4]);
    Deck::stacked(&top)
}

/// Checks when it can, calls otherwise.
pub struct Passive;

impl ActionPolicy for Passive {
    fn decide(&mut self, _view: &PlayerView<'_>, legal: &LegalActions) -> Action {
        if legal.contains(ActionKind::Check) {
            Action::Check
        } else {
            Action::Call
        }
    }

    fn name(&self) -> &str {
        "passive"
    }
}

/// Uniform over the offered kinds with a uniform raise size.
pub struct Random {
    rng: ChaCha20Rng,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl ActionPolicy for Random {
    fn decide(&mut self, _view: &PlayerView<'_>, legal: &LegalActions) -> Action {
        let kind = legal.kinds[self.rng.random_range(0..legal.kinds.len())];
        match kind {
            ActionKind::Fold => Action::Fold,
            ActionKind::Check => Action::Check,
            ActionKind::Call => Action::Call,
            ActionKind::Bet => {
                let lo = legal.min_raise_to.min(legal.max_raise_to).cents();
                let hi = legal.max_raise_to.cents();
                Action::Bet(Chips::from_cents(self.rng.random_range(lo..=hi)))
            }
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Policy driven by a closure, for scripting a specific line.
pub struct Scripted<F>(pub F);

impl<F> ActionPolicy for Scripted<F>
where
    F: FnMut(&PlayerView<'_>, &LegalActions) -> Action,
{
    fn decide(&mut self, view: &PlayerView<'_>, legal: &LegalActions) -> Action {
        (self.0)(view, legal)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

pub fn randoms(seed: u64) -> Vec<Random> {
    (0..6).map(|s| Random::new(seed * 31 + s)).collect()
}

pub fn passives() -> Vec<Passive> {
    (0..6).map(|_| Passive).collect()
}
