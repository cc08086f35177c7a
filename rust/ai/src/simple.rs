use sixmax_engine::policy::{ActionPolicy, PlayerView};
use sixmax_engine::rules::{Action, ActionKind, LegalActions};

/// Never folds and never raises.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassivePolicy;

impl ActionPolicy for PassivePolicy {
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

/// Puts the whole stack in whenever a bet is offered, calls otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggressivePolicy;

impl ActionPolicy for AggressivePolicy {
    fn decide(&mut self, _view: &PlayerView<'_>, legal: &LegalActions) -> Action {
        if legal.contains(ActionKind::Bet) {
            Action::Bet(legal.max_raise_to)
        } else if legal.contains(ActionKind::Check) {
            Action::Check
        } else {
            Action::Call
        }
    }

    fn name(&self) -> &str {
        "aggressive"
    }
}
