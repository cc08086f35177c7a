use serde::{Deserialize, Serialize};

use crate::chips::Chips;

/// What a policy asks the engine to do.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Check,
    Call,
    /// Bet or raise to this street total. The engine clamps it into
    /// [`LegalActions::min_raise_to`]..=[`LegalActions::max_raise_to`].
    Bet(Chips),
}

impl Action {
    pub fn kind(self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Bet(_) => ActionKind::Bet,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
}

/// The options offered to one actor, with the sizing bounds for a bet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalActions {
    pub kinds: Vec<ActionKind>,
    /// Chips needed to call, already clamped to the stack.
    pub to_call: Chips,
    pub min_raise_to: Chips,
    pub max_raise_to: Chips,
}

impl LegalActions {
    pub fn contains(&self, kind: ActionKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// An action checked against the legal set with its chip movement resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips moved from the stack; less than the full call when all-in.
    Call(Chips),
    /// New street total for the actor.
    Raise { to: Chips },
}

/// Options for a player facing `max_bet` with `bet` already in this street
/// and `stack` behind.
///
/// A player with chips always gets either check or call/fold, so an
/// eligible actor is never offered an empty set.
///
/// ```
/// use sixmax_engine::chips::Chips;
/// use sixmax_engine::rules::{legal_actions, ActionKind};
///
/// let unit = Chips::from_units(1);
/// let la = legal_actions(Chips::from_units(4), Chips::ZERO, Chips::from_units(4), unit);
/// // calling takes the whole stack, so raising is not offered
/// assert_eq!(la.kinds, vec![ActionKind::Call, ActionKind::Fold]);
/// ```
pub fn legal_actions(max_bet: Chips, bet: Chips, stack: Chips, unit: Chips) -> LegalActions {
    let (min_raise_to, max_raise_to) = raise_bounds(max_bet, bet, stack, unit);
    if stack.is_zero() {
        return LegalActions {
            kinds: Vec::new(),
            to_call: Chips::ZERO,
            min_raise_to,
            max_raise_to,
        };
    }
    let owed = max_bet.saturating_sub(bet);
    let kinds = if owed.is_zero() {
        vec![ActionKind::Check, ActionKind::Bet]
    } else if stack > owed {
        vec![ActionKind::Call, ActionKind::Fold, ActionKind::Bet]
    } else {
        vec![ActionKind::Call, ActionKind::Fold]
    };
    LegalActions {
        kinds,
        to_call: owed.min(stack),
        min_raise_to,
        max_raise_to,
    }
}

/// Raise-to bounds: at least double the current bet (one unit when nothing
/// has been bet), at most everything the player has this street.
pub fn raise_bounds(max_bet: Chips, bet: Chips, stack: Chips, unit: Chips) -> (Chips, Chips) {
    let min = if max_bet.is_zero() {
        unit
    } else {
        max_bet + max_bet
    };
    (min, stack + bet)
}

/// Clamps a requested raise-to into `[min, max]`. When the player cannot
/// reach the minimum the raise is all-in for `max`.
pub fn clamp_raise(requested: Chips, min: Chips, max: Chips) -> Chips {
    if max <= min {
        max
    } else {
        requested.clamp(min, max)
    }
}

/// Checks `action` against the offered set. Returns `None` when the action
/// was not offered; the engine turns that into a policy violation.
pub fn validate_action(legal: &LegalActions, action: Action) -> Option<ValidatedAction> {
    if !legal.contains(action.kind()) {
        return None;
    }
    Some(match action {
        Action::Fold => ValidatedAction::Fold,
        Action::Check => ValidatedAction::Check,
        Action::Call => ValidatedAction::Call(legal.to_call),
        Action::Bet(amount) => ValidatedAction::Raise {
            to: clamp_raise(amount, legal.min_raise_to, legal.max_raise_to),
        },
    })
}
