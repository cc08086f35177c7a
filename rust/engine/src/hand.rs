use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::OnePair => "One pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
        }
    }
}

/// Comparable strength of a five card hand. Field order matters: the derived
/// `Ord` compares the category first and the tiebreak ranks second. Unused
/// tiebreak slots are zero, so equal ranks mean a split pot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    // ordered high -> low
    pub tiebreak: [u8; 5],
}

impl HandRank {
    fn new(category: Category, ranks: &[u8]) -> Self {
        let mut tiebreak = [0u8; 5];
        for (slot, &r) in tiebreak.iter_mut().zip(ranks) {
            *slot = r;
        }
        Self { category, tiebreak }
    }

    pub fn is_royal(&self) -> bool {
        self.category == Category::StraightFlush && self.tiebreak[0] == Rank::Ace.value()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |v: u8| Rank::from_value(v).map_or("?", Rank::name);
        let t = &self.tiebreak;
        match self.category {
            Category::StraightFlush if self.is_royal() => write!(f, "Royal flush"),
            Category::StraightFlush | Category::Straight | Category::Flush | Category::HighCard => {
                write!(f, "{}, {} high", self.category.name(), name(t[0]))
            }
            Category::FourOfAKind | Category::ThreeOfAKind | Category::OnePair => {
                write!(f, "{}, {}s", self.category.name(), name(t[0]))
            }
            Category::FullHouse => write!(
                f,
                "{}, {}s full of {}s",
                self.category.name(),
                name(t[0]),
                name(t[1])
            ),
            Category::TwoPair => write!(
                f,
                "{}, {}s and {}s",
                self.category.name(),
                name(t[0]),
                name(t[1])
            ),
        }
    }
}

/// Scores exactly five cards.
///
/// Each category has its own detector; they are tried from strongest to
/// weakest and the first hit is the hand's rank.
///
/// ```
/// use sixmax_engine::cards::parse_cards;
/// use sixmax_engine::hand::{evaluate5, Category};
///
/// let cards: [_; 5] = parse_cards("Ac 2d 3h 4s 5c").unwrap().try_into().unwrap();
/// let rank = evaluate5(&cards);
/// assert_eq!(rank.category, Category::Straight);
/// assert_eq!(rank.tiebreak[0], 5);
/// ```
pub fn evaluate5(cards: &[Card; 5]) -> HandRank {
    let shape = Shape::of(cards);
    straight_flush(&shape)
        .or_else(|| four_of_a_kind(&shape))
        .or_else(|| full_house(&shape))
        .or_else(|| flush(&shape))
        .or_else(|| straight(&shape))
        .or_else(|| three_of_a_kind(&shape))
        .or_else(|| two_pair(&shape))
        .or_else(|| one_pair(&shape))
        .unwrap_or_else(|| high_card(&shape))
}

/// Best rank over every five card subset of the hole cards plus a board of
/// three to five cards.
///
/// # Errors
///
/// [`GameError::BoardSize`] when the board has fewer than 3 or more than 5
/// cards.
pub fn best_of(hole: &[Card; 2], board: &[Card]) -> Result<HandRank, GameError> {
    if !(3..=5).contains(&board.len()) {
        return Err(GameError::BoardSize(board.len()));
    }
    let mut all = Vec::with_capacity(7);
    all.extend_from_slice(hole);
    all.extend_from_slice(board);

    let mut best: Option<HandRank> = None;
    for combo in five_card_subsets(all.len()) {
        let five = combo.map(|i| all[i]);
        let rank = evaluate5(&five);
        if best.is_none_or(|b| rank > b) {
            best = Some(rank);
        }
    }
    best.ok_or(GameError::BoardSize(board.len()))
}

/// Index sets of every 5-subset of `0..n`, in lexicographic order.
fn five_card_subsets(n: usize) -> Vec<[usize; 5]> {
    let mut out = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        out.push([a, b, c, d, e]);
                    }
                }
            }
        }
    }
    out
}

/// Rank multiplicities and suitedness of five cards.
struct Shape {
    // (count, rank), sorted by count then rank, both descending
    groups: Vec<(u8, u8)>,
    // all five ranks, descending
    ranks: [u8; 5],
    suited: bool,
}

impl Shape {
    fn of(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 15];
        for c in cards {
            counts[c.rank.value() as usize] += 1;
        }
        let mut groups: Vec<(u8, u8)> = (2..=14u8)
            .filter(|&r| counts[r as usize] > 0)
            .map(|r| (counts[r as usize], r))
            .collect();
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let mut ranks = cards.map(|c| c.rank.value());
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let suited = cards.iter().all(|c| c.suit == cards[0].suit);
        Self {
            groups,
            ranks,
            suited,
        }
    }

    /// Ranks of the groups with exactly `n` cards, highest first.
    fn with_count(&self, n: u8) -> Vec<u8> {
        self.groups
            .iter()
            .filter(|g| g.0 == n)
            .map(|g| g.1)
            .collect()
    }

    /// High card of the straight, with A-2-3-4-5 counted as five high.
    fn straight_high(&self) -> Option<u8> {
        if self.groups.len() != 5 {
            return None;
        }
        let r = &self.ranks;
        if r[0] - r[4] == 4 {
            return Some(r[0]);
        }
        // wheel: the ace is the only card above five
        if r == &[14, 5, 4, 3, 2] {
            return Some(5);
        }
        None
    }
}

fn straight_flush(s: &Shape) -> Option<HandRank> {
    if !s.suited {
        return None;
    }
    s.straight_high()
        .map(|high| HandRank::new(Category::StraightFlush, &[high]))
}

fn four_of_a_kind(s: &Shape) -> Option<HandRank> {
    let quad = *s.with_count(4).first()?;
    let kicker = s.ranks.iter().copied().find(|&r| r != quad).unwrap_or(0);
    Some(HandRank::new(Category::FourOfAKind, &[quad, kicker]))
}

fn full_house(s: &Shape) -> Option<HandRank> {
    let trips = *s.with_count(3).first()?;
    let pair = *s.with_count(2).first()?;
    Some(HandRank::new(Category::FullHouse, &[trips, pair]))
}

fn flush(s: &Shape) -> Option<HandRank> {
    s.suited.then(|| HandRank::new(Category::Flush, &s.ranks))
}

fn straight(s: &Shape) -> Option<HandRank> {
    s.straight_high()
        .map(|high| HandRank::new(Category::Straight, &[high]))
}

fn three_of_a_kind(s: &Shape) -> Option<HandRank> {
    let trips = *s.with_count(3).first()?;
    let mut key = vec![trips];
    key.extend(s.with_count(1));
    Some(HandRank::new(Category::ThreeOfAKind, &key))
}

fn two_pair(s: &Shape) -> Option<HandRank> {
    let pairs = s.with_count(2);
    if pairs.len() < 2 {
        return None;
    }
    let mut key = vec![pairs[0], pairs[1]];
    key.extend(s.with_count(1));
    Some(HandRank::new(Category::TwoPair, &key))
}

fn one_pair(s: &Shape) -> Option<HandRank> {
    let pair = *s.with_count(2).first()?;
    let mut key = vec![pair];
    key.extend(s.with_count(1));
    Some(HandRank::new(Category::OnePair, &key))
}

fn high_card(s: &Shape) -> HandRank {
    HandRank::new(Category::HighCard, &s.ranks)
}
