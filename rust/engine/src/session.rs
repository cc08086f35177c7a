use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::chips::Chips;
use crate::config::SessionConfig;
use crate::deck::Deck;
use crate::engine::{Engine, HandOutcome};
use crate::errors::GameError;
use crate::logger::HandHistory;
use crate::player::Player;
use crate::policy::ActionPolicy;

/// One finished hand as reported to the caller.
#[derive(Debug, Clone)]
pub struct HandSummary {
    pub hand_no: u64,
    pub button_seat: usize,
    pub outcome: HandOutcome,
    pub history: HandHistory,
}

/// A table that plays hands back to back. Stacks carry over, the button
/// moves one occupied seat to the left each hand and the deck is shuffled
/// from a single seeded stream, so a seed reproduces the whole session.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    players: Vec<Player>,
    rng: ChaCha20Rng,
    button_seat: usize,
    hands_played: u64,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, GameError> {
        config.validate()?;
        let players = (0..config.seats)
            .map(|seat| Player::new(seat, config.starting_stack))
            .collect();
        Ok(Self {
            rng: ChaCha20Rng::seed_from_u64(config.seed),
            button_seat: config.button_seat,
            players,
            config,
            hands_played: 0,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn button_seat(&self) -> usize {
        self.button_seat
    }
    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }

    pub fn total_chips(&self) -> Chips {
        self.players.iter().map(Player::stack).sum()
    }

    /// At least two players still have chips.
    pub fn can_continue(&self) -> bool {
        self.players.iter().filter(|p| !p.stack().is_zero()).count() >= 2
    }

    /// Plays one hand with `policies[seat]` deciding for each seat.
    ///
    /// A hand that fails (for example on a policy violation) is abandoned
    /// and the stacks stay as they were before it started. An abandoned
    /// hand still uses up its hand number and the button moves on, so the
    /// next hand is never a replay of the same deal position.
    pub fn play_hand<P: ActionPolicy>(&mut self, policies: &mut [P]) -> Result<HandSummary, GameError> {
        if !self.can_continue() {
            return Err(GameError::NotEnoughPlayers);
        }
        let hand_no = self.hands_played + 1;
        let deck = Deck::shuffled(&mut self.rng);
        let mut engine = Engine::start(
            self.players.clone(),
            deck,
            hand_no,
            self.button_seat,
            self.config.blinds,
        )?;
        let outcome = match engine.run(policies) {
            Ok(outcome) => outcome,
            Err(e) => {
                if e.is_recoverable() {
                    self.hands_played = hand_no;
                    self.rotate_button();
                    debug!(hand_no, error = %e, "hand abandoned");
                }
                return Err(e);
            }
        };
        let history = engine.history().clone();
        let button_seat = self.button_seat;
        self.players = engine.into_players();
        self.hands_played = hand_no;
        self.rotate_button();
        info!(hand_no, winners = ?outcome.winners, pot = %outcome.pot, "hand finished");
        Ok(HandSummary {
            hand_no,
            button_seat,
            outcome,
            history,
        })
    }

    /// Plays up to `config.hands` hands, stopping early when only one player
    /// has chips left.
    pub fn run<P: ActionPolicy>(&mut self, policies: &mut [P]) -> Result<Vec<HandSummary>, GameError> {
        let mut out = Vec::new();
        while self.hands_played < self.config.hands && self.can_continue() {
            out.push(self.play_hand(policies)?);
        }
        Ok(out)
    }

    fn rotate_button(&mut self) {
        let n = self.players.len();
        for step in 1..=n {
            let seat = (self.button_seat + step) % n;
            if !self.players[seat].stack().is_zero() {
                self.button_seat = seat;
                debug!(button_seat = seat, "button moved");
                return;
            }
        }
    }
}
