use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sixmax_engine::chips::Chips;
use sixmax_engine::policy::{ActionPolicy, PlayerView};
use sixmax_engine::rules::{Action, ActionKind, LegalActions};

/// Picks uniformly among the offered actions; a bet is sized uniformly
/// between the minimum raise and all-in, in whole hundredths. The engine
/// only asks when at least one action is offered.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl ActionPolicy for RandomPolicy {
    fn decide(&mut self, _view: &PlayerView<'_>, legal: &LegalActions) -> Action {
        match legal.kinds[self.rng.random_range(0..legal.kinds.len())] {
            ActionKind::Fold => Action::Fold,
            ActionKind::Check => Action::Check,
            ActionKind::Call => Action::Call,
            ActionKind::Bet => {
                let hi = legal.max_raise_to.cents();
                let lo = legal.min_raise_to.cents().min(hi);
                Action::Bet(Chips::from_cents(self.rng.random_range(lo..=hi)))
            }
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}
