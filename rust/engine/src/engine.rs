use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::{format_cards, Card};
use crate::chips::Chips;
use crate::deck::Deck;
use crate::errors::{ConfigError, GameError};
use crate::hand::{best_of, HandRank};
use crate::logger::{HandEvent, HandHistory, ShowdownInfo, Street};
use crate::player::{Player, PlayerStatus};
use crate::policy::{ActionPolicy, PlayerView};
use crate::positions::{
    assign_positions, next_position, seats_by_position, walk_from, BTN, SB, SEAT_COUNT,
};
use crate::rules::{legal_actions, validate_action, Action, ActionKind, LegalActions, ValidatedAction};

/// Upper bound on decisions in one hand. Every raise at least doubles the
/// bet or puts a player all-in, so real hands stay far below this.
pub const MAX_DECISIONS_PER_HAND: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: Chips,
    pub big: Chips,
}

impl Default for Blinds {
    fn default() -> Self {
        Self {
            small: Chips::from_cents(50),
            big: Chips::from_units(1),
        }
    }
}

/// Betting bookkeeping for the current street.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BettingState {
    pub street: Street,
    /// Highest street total; never decreases within a street
    pub max_bet: Chips,
    /// Players that still have to act before the street can close
    pub owed: usize,
    pub in_hand: usize,
    pub all_in: usize,
    /// Seat of the last player to act
    pub last_actor: Option<usize>,
    /// Set once at most one player can still bet; the board is then dealt
    /// out with no further decisions.
    pub runout: bool,
}

/// How a finished hand was settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandOutcome {
    pub winners: Vec<usize>,
    /// Chips paid to each winning seat
    pub payouts: Vec<(usize, Chips)>,
    pub pot: Chips,
    pub board: Vec<Card>,
    /// `None` when everybody else folded
    pub showdown: Option<ShowdownInfo>,
}

impl HandOutcome {
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }

    pub fn reached_showdown(&self) -> bool {
        self.showdown.is_some()
    }
}

/// Runs one hand at a six-max table.
///
/// The engine owns the players for the duration of the hand and hands them
/// back through [`Engine::into_players`]. Chips move from stacks straight
/// into the pot, so `pot + Σ stack` stays equal to the chips the table
/// started with; every step re-checks that.
///
/// ```
/// use sixmax_engine::chips::Chips;
/// use sixmax_engine::deck::Deck;
/// use sixmax_engine::engine::{Blinds, Engine};
/// use sixmax_engine::player::Player;
///
/// let players = (0..6).map(|s| Player::new(s, Chips::from_units(100))).collect();
/// let engine = Engine::start(players, Deck::new(), 1, 0, Blinds::default()).unwrap();
/// assert_eq!(engine.pot(), Chips::from_cents(150));
/// // seat 3 sits in early position when the button is seat 0
/// assert_eq!(engine.current_actor(), Some(3));
/// ```
#[derive(Debug)]
pub struct Engine {
    hand_no: u64,
    button_seat: usize,
    blinds: Blinds,
    players: Vec<Player>,
    // seat_at[position] = seat
    seat_at: Vec<usize>,
    deck: Deck,
    board: Vec<Card>,
    pot: Chips,
    state: BettingState,
    actor: Option<usize>,
    // position the next search for an actor starts from
    cursor: usize,
    total_chips: Chips,
    decisions: usize,
    history: HandHistory,
    outcome: Option<HandOutcome>,
}

impl Engine {
    /// Assigns positions, posts the blinds, deals hole cards and finds the
    /// first actor. Players with an empty stack are dealt out.
    ///
    /// # Errors
    ///
    /// Configuration errors for a wrong seat count or button seat, and
    /// [`GameError::NotEnoughPlayers`] when fewer than two players have chips.
    pub fn start(
        mut players: Vec<Player>,
        deck: Deck,
        hand_no: u64,
        button_seat: usize,
        blinds: Blinds,
    ) -> Result<Self, GameError> {
        if players.len() != SEAT_COUNT {
            return Err(ConfigError::SeatCount {
                expected: SEAT_COUNT,
                actual: players.len(),
            }
            .into());
        }
        let positions = assign_positions(button_seat, players.len())?;
        for (p, &pos) in players.iter_mut().zip(&positions) {
            p.reset_for_hand(pos);
        }
        if players.iter().filter(|p| !p.stack().is_zero()).count() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }
        let total_chips = players.iter().map(Player::stack).sum();

        let mut engine = Self {
            hand_no,
            button_seat,
            blinds,
            players,
            seat_at: seats_by_position(&positions),
            deck,
            board: Vec::with_capacity(5),
            pot: Chips::ZERO,
            state: BettingState {
                street: Street::Preflop,
                max_bet: Chips::ZERO,
                owed: 0,
                in_hand: 0,
                all_in: 0,
                last_actor: None,
                runout: false,
            },
            actor: None,
            cursor: BTN,
            total_chips,
            decisions: 0,
            history: HandHistory::new(),
            outcome: None,
        };
        engine.history.push(HandEvent::HandStarted {
            hand_no,
            button_seat,
        });
        debug!(hand_no, button_seat, "hand started");

        let bb_pos = engine.post_blinds()?;
        engine.deal_hole_cards()?;
        engine.cursor = next_position(bb_pos, SEAT_COUNT);
        engine.state.owed = engine.players.iter().filter(|p| p.can_act()).count();
        engine.settle()?;
        Ok(engine)
    }

    pub fn hand_no(&self) -> u64 {
        self.hand_no
    }
    pub fn button_seat(&self) -> usize {
        self.button_seat
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn state(&self) -> &BettingState {
        &self.state
    }
    pub fn street(&self) -> Street {
        self.state.street
    }
    pub fn history(&self) -> &HandHistory {
        &self.history
    }
    pub fn outcome(&self) -> Option<&HandOutcome> {
        self.outcome.as_ref()
    }
    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }
    pub fn total_chips(&self) -> Chips {
        self.total_chips
    }

    /// Seat whose decision the engine is waiting for.
    pub fn current_actor(&self) -> Option<usize> {
        self.actor
    }

    /// Options for the current actor.
    pub fn legal_actions(&self) -> Option<LegalActions> {
        self.actor.map(|seat| self.legal_for(seat))
    }

    /// What the current actor's policy gets to see.
    pub fn view(&self) -> Option<PlayerView<'_>> {
        let seat = self.actor?;
        let p = &self.players[seat];
        Some(PlayerView {
            seat,
            position: p.position(),
            hole_cards: p.hole_cards()?,
            stack: p.stack(),
            bet: p.bet(),
            street: self.state.street,
            board: &self.board,
            pot: self.pot,
            max_bet: self.state.max_bet,
            big_blind: self.blinds.big,
            players_in_hand: self.state.in_hand,
        })
    }

    /// Gives the players back once the hand is over (or abandoned).
    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    /// Plays the hand to the end, asking `policies[seat]` for every
    /// decision.
    ///
    /// # Errors
    ///
    /// A policy that picks an action it was not offered aborts the hand with
    /// [`GameError::PolicyViolation`]; invariant errors mean an engine bug.
    pub fn run<P: ActionPolicy>(&mut self, policies: &mut [P]) -> Result<HandOutcome, GameError> {
        if policies.len() != self.players.len() {
            return Err(ConfigError::SeatCount {
                expected: self.players.len(),
                actual: policies.len(),
            }
            .into());
        }
        while let Some(seat) = self.actor {
            let legal = self.legal_for(seat);
            let action = {
                let view = self
                    .view()
                    .ok_or_else(|| GameError::Invariant(format!("seat {seat} acts without cards")))?;
                policies[seat].decide(&view, &legal)
            };
            self.apply_action(seat, action)?;
        }
        self.outcome
            .clone()
            .ok_or_else(|| GameError::Invariant("no actor left but the hand is not settled".into()))
    }

    /// Applies one decision for `seat`, then advances streets, runs out the
    /// board or settles the pot as far as possible without another decision.
    pub fn apply_action(&mut self, seat: usize, action: Action) -> Result<(), GameError> {
        if self.outcome.is_some() {
            return Err(GameError::HandAlreadyComplete);
        }
        if self.actor != Some(seat) {
            return Err(GameError::NotPlayersTurn {
                expected: self.actor,
                actual: seat,
            });
        }
        self.decisions += 1;
        if self.decisions > MAX_DECISIONS_PER_HAND {
            return Err(GameError::Invariant(format!(
                "more than {MAX_DECISIONS_PER_HAND} decisions in one hand"
            )));
        }

        let legal = self.legal_for(seat);
        if legal.is_empty() {
            return Err(GameError::Invariant(format!(
                "seat {seat} was given the turn with no legal action"
            )));
        }
        let Some(validated) = validate_action(&legal, action) else {
            warn!(seat, ?action, street = ?self.state.street, offered = ?legal.kinds, "policy chose an action that was not offered");
            return Err(GameError::PolicyViolation {
                seat,
                action,
                street: self.state.street,
            });
        };

        let (kind, moved) = match validated {
            ValidatedAction::Fold => {
                self.players[seat].fold();
                self.state.owed = self.state.owed.saturating_sub(1);
                (ActionKind::Fold, Chips::ZERO)
            }
            ValidatedAction::Check => {
                self.state.owed = self.state.owed.saturating_sub(1);
                (ActionKind::Check, Chips::ZERO)
            }
            ValidatedAction::Call(amount) => {
                let moved = self.players[seat].commit(amount);
                self.pot += moved;
                self.state.owed = self.state.owed.saturating_sub(1);
                (ActionKind::Call, moved)
            }
            ValidatedAction::Raise { to } => {
                let delta = to.saturating_sub(self.players[seat].bet());
                let moved = self.players[seat].commit(delta);
                self.pot += moved;
                let total = self.players[seat].bet();
                if total <= self.state.max_bet {
                    return Err(GameError::Invariant(format!(
                        "raise by seat {seat} to {total} does not exceed {}",
                        self.state.max_bet
                    )));
                }
                self.state.max_bet = total;
                // everyone else who can still bet must respond
                self.state.owed = self
                    .players
                    .iter()
                    .filter(|p| p.seat() != seat && p.can_act())
                    .count();
                (ActionKind::Bet, moved)
            }
        };

        let p = &self.players[seat];
        let position = p.position();
        self.history.push(HandEvent::Acted {
            seat,
            position,
            street: self.state.street,
            kind,
            amount: moved,
            street_bet: p.bet(),
            stack: p.stack(),
            all_in: p.status() == PlayerStatus::AllIn,
        });
        debug!(seat, position, ?kind, amount = %moved, stack = %p.stack(), pot = %self.pot, "action");

        self.state.last_actor = Some(seat);
        self.cursor = next_position(position, SEAT_COUNT);
        self.settle()
    }

    fn legal_for(&self, seat: usize) -> LegalActions {
        let p = &self.players[seat];
        if !p.can_act() {
            return legal_actions(self.state.max_bet, p.bet(), Chips::ZERO, self.blinds.big);
        }
        legal_actions(self.state.max_bet, p.bet(), p.stack(), self.blinds.big)
    }

    /// Small blind from the first player with chips walking back from the
    /// SB position, big blind from the next one. On a full table that is
    /// positions 5 and 4. Returns the big blind's position.
    fn post_blinds(&mut self) -> Result<usize, GameError> {
        let has_chips: Vec<bool> = (0..SEAT_COUNT)
            .map(|pos| !self.players[self.seat_at[pos]].stack().is_zero())
            .collect();
        let sb_pos = walk_from(SB, SEAT_COUNT, |pos| has_chips[pos]).ok_or(GameError::NotEnoughPlayers)?;
        let bb_pos = walk_from(next_position(sb_pos, SEAT_COUNT), SEAT_COUNT, |pos| {
            pos != sb_pos && has_chips[pos]
        })
        .ok_or(GameError::NotEnoughPlayers)?;

        for (pos, amount, big) in [(sb_pos, self.blinds.small, false), (bb_pos, self.blinds.big, true)] {
            let seat = self.seat_at[pos];
            let posted = self.players[seat].commit(amount);
            self.pot += posted;
            self.history.push(HandEvent::BlindPosted {
                seat,
                position: pos,
                amount: posted,
                big,
            });
        }
        self.state.max_bet = self.blinds.big;
        Ok(bb_pos)
    }

    /// Two rounds, one card at a time, starting left of the button.
    fn deal_hole_cards(&mut self) -> Result<(), GameError> {
        let order: Vec<usize> = (0..SEAT_COUNT)
            .rev()
            .map(|pos| self.seat_at[pos])
            .filter(|&seat| self.players[seat].status() != PlayerStatus::Folded)
            .collect();
        let mut first = [None; SEAT_COUNT];
        for &seat in &order {
            first[seat] = Some(self.deck.draw()?);
        }
        for &seat in &order {
            let second = self.deck.draw()?;
            let opener = first[seat]
                .ok_or_else(|| GameError::Invariant(format!("seat {seat} missed its first card")))?;
            let cards = [opener, second];
            self.players[seat].deal(cards);
            self.history.push(HandEvent::HoleCards {
                seat,
                position: self.players[seat].position(),
                cards,
            });
        }
        Ok(())
    }

    /// Moves the hand forward until a decision is needed or it is over.
    fn settle(&mut self) -> Result<(), GameError> {
        loop {
            self.check_conservation()?;
            self.refresh_counts();

            if self.state.in_hand <= 1 {
                return self.award_uncontested();
            }
            if self.state.owed > 0 && self.closed_by_all_ins() {
                self.state.owed = 0;
                self.state.runout = true;
            }
            if self.state.owed > 0 {
                let pos = walk_from(self.cursor, SEAT_COUNT, |pos| {
                    self.players[self.seat_at[pos]].can_act()
                })
                .ok_or_else(|| {
                    GameError::Invariant(format!(
                        "{} players owed an action but nobody can act",
                        self.state.owed
                    ))
                })?;
                self.actor = Some(self.seat_at[pos]);
                return Ok(());
            }

            self.actor = None;
            self.return_uncalled()?;
            match self.state.street {
                Street::Preflop | Street::Flop | Street::Turn => self.next_street()?,
                Street::River => return self.showdown(),
                Street::Showdown | Street::Complete => {
                    return Err(GameError::Invariant(format!(
                        "betting resumed on {:?}",
                        self.state.street
                    )))
                }
            }
        }
    }

    /// At most one player can still bet and nobody faces an unmatched bet:
    /// further decisions could not change the pot.
    fn closed_by_all_ins(&self) -> bool {
        let mut actors = self.players.iter().filter(|p| p.can_act());
        match (actors.next(), actors.next()) {
            (None, _) => true,
            (Some(p), None) => p.bet() >= self.state.max_bet,
            _ => false,
        }
    }

    fn next_street(&mut self) -> Result<(), GameError> {
        let next = self.state.street.next();
        for p in &mut self.players {
            p.clear_bet();
        }
        self.state.max_bet = Chips::ZERO;

        self.deck.burn_card();
        let mut dealt = Vec::with_capacity(3);
        for _ in 0..next.cards_dealt() {
            let c = self.deck.draw()?;
            self.board.push(c);
            dealt.push(c);
        }
        self.history.push(HandEvent::BoardDealt {
            street: next,
            cards: dealt,
            board: self.board.clone(),
        });
        debug!(street = ?next, board = %format_cards(&self.board), runout = self.state.runout, "board dealt");

        self.state.street = next;
        let can_act = self.players.iter().filter(|p| p.can_act()).count();
        if can_act <= 1 {
            self.state.runout = true;
        }
        self.state.owed = if self.state.runout { 0 } else { can_act };
        self.cursor = BTN;
        Ok(())
    }

    /// Hands back the part of the top street bet nobody else matched.
    fn return_uncalled(&mut self) -> Result<(), GameError> {
        let mut bets: Vec<(Chips, usize)> = self.players.iter().map(|p| (p.bet(), p.seat())).collect();
        bets.sort_unstable_by(|a, b| b.cmp(a));
        let (top, seat) = bets[0];
        let second = bets.get(1).map_or(Chips::ZERO, |b| b.0);
        if top <= second || !self.players[seat].in_hand() {
            return Ok(());
        }
        let excess = top - second;
        self.pot = self
            .pot
            .checked_sub(excess)
            .ok_or_else(|| GameError::Invariant(format!("uncalled {excess} exceeds pot {}", self.pot)))?;
        self.players[seat].refund(excess);
        self.history.push(HandEvent::UncalledReturned {
            seat,
            amount: excess,
        });
        debug!(seat, amount = %excess, "uncalled bet returned");
        self.refresh_counts();
        Ok(())
    }

    fn award_uncontested(&mut self) -> Result<(), GameError> {
        self.actor = None;
        self.return_uncalled()?;
        let seat = self
            .players
            .iter()
            .position(Player::in_hand)
            .ok_or_else(|| GameError::Invariant("every player left the hand".into()))?;
        let amount = self.pot;
        self.players[seat].add_chips(amount);
        self.pot = Chips::ZERO;
        self.history.push(HandEvent::Uncontested { seat, amount });
        info!(hand_no = self.hand_no, seat, pot = %amount, "uncontested");
        self.finish(vec![seat], vec![(seat, amount)], None, amount)
    }

    /// Evaluates every remaining hand and pays the best. Odd hundredths of
    /// a split go one each to the winners closest to the button's left.
    fn showdown(&mut self) -> Result<(), GameError> {
        self.state.street = Street::Showdown;
        let mut ranked: Vec<(usize, HandRank)> = Vec::new();
        for pos in (0..SEAT_COUNT).rev() {
            let seat = self.seat_at[pos];
            let p = &self.players[seat];
            if !p.in_hand() {
                continue;
            }
            let cards = p
                .hole_cards()
                .ok_or_else(|| GameError::Invariant(format!("seat {seat} at showdown without cards")))?;
            let rank = best_of(&cards, &self.board)?;
            self.history.push(HandEvent::ShowdownReveal { seat, cards, rank });
            ranked.push((seat, rank));
        }
        let best = ranked
            .iter()
            .map(|r| r.1)
            .max()
            .ok_or_else(|| GameError::Invariant("showdown with no hands".into()))?;
        let winners: Vec<usize> = ranked.iter().filter(|r| r.1 == best).map(|r| r.0).collect();

        let pot = self.pot;
        let (share, odd) = pot.split(winners.len() as u64);
        let split = winners.len() > 1;
        let mut payouts = Vec::with_capacity(winners.len());
        for (i, &seat) in winners.iter().enumerate() {
            let extra = if (i as u64) < odd { Chips::from_cents(1) } else { Chips::ZERO };
            let amount = share + extra;
            self.players[seat].add_chips(amount);
            self.history.push(HandEvent::PotAwarded { seat, amount, split });
            payouts.push((seat, amount));
        }
        self.pot = Chips::ZERO;
        info!(hand_no = self.hand_no, ?winners, rank = %best, pot = %pot, "showdown");

        let info = ShowdownInfo {
            winners: winners.clone(),
            rank: best,
            notes: split.then(|| format!("split {} ways", winners.len())),
        };
        self.finish(winners, payouts, Some(info), pot)
    }

    fn finish(
        &mut self,
        winners: Vec<usize>,
        payouts: Vec<(usize, Chips)>,
        showdown: Option<ShowdownInfo>,
        pot: Chips,
    ) -> Result<(), GameError> {
        for p in &mut self.players {
            p.clear_bet();
        }
        self.state.street = Street::Complete;
        self.state.owed = 0;
        self.actor = None;
        self.outcome = Some(HandOutcome {
            winners,
            payouts,
            pot,
            board: self.board.clone(),
            showdown,
        });
        self.check_conservation()
    }

    fn refresh_counts(&mut self) {
        self.state.in_hand = self.players.iter().filter(|p| p.in_hand()).count();
        self.state.all_in = self
            .players
            .iter()
            .filter(|p| p.in_hand() && p.status() == PlayerStatus::AllIn)
            .count();
    }

    fn check_conservation(&self) -> Result<(), GameError> {
        let stacks: Chips = self.players.iter().map(Player::stack).sum();
        if self.pot + stacks != self.total_chips {
            return Err(GameError::Invariant(format!(
                "pot {} + stacks {} != {} chips at start",
                self.pot, stacks, self.total_chips
            )));
        }
        Ok(())
    }
}
