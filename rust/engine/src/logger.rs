//! Streets and the per-hand history.
//!
//! The engine only produces a [`HandHistory`]; persisting it is the
//! caller's job (the CLI appends [`HandHistory::lines`] to a text log or a
//! [`HandRecord`] per line to a JSONL file).

use serde::{Deserialize, Serialize};

use crate::cards::{format_cards, Card};
use crate::chips::Chips;
use crate::hand::HandRank;
use crate::positions::position_name;
use crate::rules::ActionKind;

/// Width of the separator and header rules in the text log.
pub const RULE_WIDTH: usize = 40;

/// Phase of a hand. Betting happens on the first four.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    Complete,
}

impl Street {
    pub fn next(self) -> Street {
        match self {
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River => Street::Showdown,
            Street::Showdown | Street::Complete => Street::Complete,
        }
    }

    /// Community cards revealed when this street starts.
    pub fn cards_dealt(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
            Street::Preflop | Street::Showdown | Street::Complete => 0,
        }
    }

    pub fn is_betting(self) -> bool {
        matches!(
            self,
            Street::Preflop | Street::Flop | Street::Turn | Street::River
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
            Street::Showdown => "Showdown",
            Street::Complete => "Complete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HandEvent {
    HandStarted {
        hand_no: u64,
        button_seat: usize,
    },
    BlindPosted {
        seat: usize,
        position: usize,
        amount: Chips,
        big: bool,
    },
    HoleCards {
        seat: usize,
        position: usize,
        cards: [Card; 2],
    },
    Acted {
        seat: usize,
        position: usize,
        street: Street,
        kind: ActionKind,
        /// Chips moved from the stack by this action.
        amount: Chips,
        /// Street total after the action.
        street_bet: Chips,
        stack: Chips,
        all_in: bool,
    },
    BoardDealt {
        street: Street,
        cards: Vec<Card>,
        board: Vec<Card>,
    },
    UncalledReturned {
        seat: usize,
        amount: Chips,
    },
    ShowdownReveal {
        seat: usize,
        cards: [Card; 2],
        rank: HandRank,
    },
    PotAwarded {
        seat: usize,
        amount: Chips,
        split: bool,
    },
    Uncontested {
        seat: usize,
        amount: Chips,
    },
}

impl HandEvent {
    /// One human readable line.
    pub fn line(&self) -> String {
        let who = |seat: usize, position: usize| {
            format!("Seat {} ({})", seat + 1, position_name(position))
        };
        match self {
            HandEvent::HandStarted {
                hand_no,
                button_seat,
            } => format!("Hand #{}: button is seat {}", hand_no, button_seat + 1),
            HandEvent::BlindPosted {
                seat,
                position,
                amount,
                big,
            } => format!(
                "{} posts {} blind {}",
                who(*seat, *position),
                if *big { "big" } else { "small" },
                amount
            ),
            HandEvent::HoleCards {
                seat,
                position,
                cards,
            } => format!("{} received [{}]", who(*seat, *position), format_cards(cards)),
            HandEvent::Acted {
                seat,
                position,
                kind,
                amount,
                street_bet,
                stack,
                all_in,
                ..
            } => {
                let verb = match kind {
                    ActionKind::Fold => "folds".to_string(),
                    ActionKind::Check => "checks".to_string(),
                    ActionKind::Call => format!("calls {}", amount),
                    ActionKind::Bet => format!("bets to {}", street_bet),
                };
                let tail = if *all_in { " and is all-in" } else { "" };
                format!("{} {}{} (stack {})", who(*seat, *position), verb, tail, stack)
            }
            HandEvent::BoardDealt { street, board, .. } => {
                format!("*** {} *** [{}]", street.name(), format_cards(board))
            }
            HandEvent::UncalledReturned { seat, amount } => {
                format!("Uncalled bet of {} returned to seat {}", amount, seat + 1)
            }
            HandEvent::ShowdownReveal { seat, cards, rank } => {
                format!("Seat {} shows [{}]: {}", seat + 1, format_cards(cards), rank)
            }
            HandEvent::PotAwarded {
                seat,
                amount,
                split,
            } => {
                let how = if *split { " (split pot)" } else { "" };
                format!("Seat {} wins {}{}", seat + 1, amount, how)
            }
            HandEvent::Uncontested { seat, amount } => {
                format!("Seat {} wins {} uncontested", seat + 1, amount)
            }
        }
    }
}

/// Ordered events of one hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: HandEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Text rendering, closed by a separator line.
    pub fn lines(&self) -> Vec<String> {
        let mut v: Vec<String> = self.events.iter().map(HandEvent::line).collect();
        v.push(separator());
        v
    }
}

pub fn separator() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Header written once at the top of a text hand log.
pub fn log_header() -> [String; 2] {
    ["Poker Hand Log".to_string(), "=".repeat(RULE_WIDTH)]
}

/// Who won and how, for records that go to showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Winning seats, more than one on a split
    pub winners: Vec<usize>,
    pub rank: HandRank,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One hand as a JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// `<prefix>-NNNNNN`
    pub hand_id: String,
    pub seed: Option<u64>,
    pub button_seat: usize,
    pub board: Vec<Card>,
    pub pot: Chips,
    pub winners: Vec<usize>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
    pub history: HandHistory,
}

impl HandRecord {
    /// Single line JSON for appending to a `.jsonl` file.
    pub fn to_jsonl(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub fn format_hand_id(prefix: &str, seq: u64) -> String {
    format!("{}-{:06}", prefix, seq)
}
