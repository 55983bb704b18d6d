use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;
use tracing::debug;

use super::basic::{sort_showdown, Card};

pub const HAND_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("Invalid hand size: {0} cards (at most 5)")]
    InvalidHandSize(usize),
}

/// Hand categories from best (rank 0) to worst (rank 8). Iteration order is
/// the order in which matchers are tried.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum HandCategory {
    StraightFlush = 0,
    FourOfAKind = 1,
    FullHouse = 2,
    Flush = 3,
    Straight = 4,
    ThreeOfAKind = 5,
    TwoPair = 6,
    OnePair = 7,
    HighCard = 8,
}

impl HandCategory {
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// A lower rank always wins, whatever the card values.
    pub fn beats(self, other: HandCategory) -> bool {
        self.rank() < other.rank()
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::StraightFlush => "Straight flush",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::FullHouse => "Full house",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::TwoPair => "Two pair",
            HandCategory::OnePair => "One pair",
            HandCategory::HighCard => "High card",
        }
    }

    /// Number of matched cards a full five-card classification produces.
    pub fn matched_len(self) -> usize {
        match self {
            HandCategory::StraightFlush
            | HandCategory::FullHouse
            | HandCategory::Flush
            | HandCategory::Straight
            | HandCategory::HighCard => 5,
            HandCategory::FourOfAKind | HandCategory::TwoPair => 4,
            HandCategory::ThreeOfAKind => 3,
            HandCategory::OnePair => 2,
        }
    }

    /// Runs this category's matcher over cards already in showdown order.
    /// An empty result means the category does not apply.
    fn match_cards(self, sorted: &[Card]) -> Vec<Card> {
        match self {
            HandCategory::StraightFlush => match_straight_flush(sorted),
            HandCategory::FourOfAKind => first_run(sorted, 4),
            HandCategory::FullHouse => match_full_house(sorted),
            HandCategory::Flush => match_flush(sorted),
            HandCategory::Straight => match_straight(sorted),
            HandCategory::ThreeOfAKind => first_run(sorted, 3),
            HandCategory::TwoPair => match_two_pair(sorted),
            HandCategory::OnePair => first_run(sorted, 2),
            HandCategory::HighCard => sorted.to_vec(),
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClassifiedHand {
    pub category: HandCategory,
    /// Cards that justify the category, in showdown order. Only these take
    /// part in tie-breaking; kickers are left out.
    pub matched: Vec<Card>,
}

impl ClassifiedHand {
    /// Classifies a hand.
    ///
    /// Fewer than five cards is a degraded case: the hand is `HighCard` over
    /// the cards as given, unsorted. Five cards are sorted and matched
    /// against every category from best to worst. More than five is rejected.
    pub fn classify(cards: &[Card]) -> Result<Self, HandError> {
        if cards.len() > HAND_SIZE {
            return Err(HandError::InvalidHandSize(cards.len()));
        }

        if cards.len() < HAND_SIZE {
            debug!(cards = cards.len(), "Short hand classified as high card");
            return Ok(Self {
                category: HandCategory::HighCard,
                matched: cards.to_vec(),
            });
        }

        let mut sorted = cards.to_vec();
        sort_showdown(&mut sorted);

        let hand = HandCategory::iter()
            .find_map(|category| {
                let matched = category.match_cards(&sorted);
                (!matched.is_empty()).then_some(Self { category, matched })
            })
            .unwrap_or_else(|| Self {
                category: HandCategory::HighCard,
                matched: sorted.clone(),
            });

        debug!(category = %hand.category, matched = hand.matched.len(), "Classified hand");
        Ok(hand)
    }

    pub fn category_name(&self) -> &'static str {
        self.category.name()
    }
}

fn same_value(run: &[Card]) -> bool {
    run.iter().all(|card| card.rank == run[0].rank)
}

/// First run of `len` equal values, scanning from the left.
fn first_run(cards: &[Card], len: usize) -> Vec<Card> {
    cards
        .windows(len)
        .find(|run| same_value(run))
        .map(<[Card]>::to_vec)
        .unwrap_or_default()
}

fn match_straight_flush(cards: &[Card]) -> Vec<Card> {
    if !match_straight(cards).is_empty() && !match_flush(cards).is_empty() {
        cards.to_vec()
    } else {
        Vec::new()
    }
}

// Greedy single pass: a triple or a pair is consumed as soon as it is seen,
// and a later run of the same kind replaces an earlier one.
fn match_full_house(cards: &[Card]) -> Vec<Card> {
    let mut triple: Option<&[Card]> = None;
    let mut pair: Option<&[Card]> = None;

    let mut i = 0;
    while i + 1 < cards.len() {
        if i + 2 < cards.len() && same_value(&cards[i..i + 3]) {
            triple = Some(&cards[i..i + 3]);
            i += 3;
        } else if same_value(&cards[i..i + 2]) {
            pair = Some(&cards[i..i + 2]);
            i += 2;
        } else {
            i += 1;
        }
    }

    match (triple, pair) {
        (Some(triple), Some(pair)) => [triple, pair].concat(),
        _ => Vec::new(),
    }
}

fn match_flush(cards: &[Card]) -> Vec<Card> {
    match cards.first() {
        Some(first) if cards.iter().all(|card| card.suit == first.suit) => cards.to_vec(),
        _ => Vec::new(),
    }
}

// Consecutive descending values starting at the first card. No wraparound,
// so A-5-4-3-2 is not a straight.
fn match_straight(cards: &[Card]) -> Vec<Card> {
    let Some(first) = cards.first() else {
        return Vec::new();
    };
    let start = i32::from(first.value());

    let consecutive = cards
        .iter()
        .enumerate()
        .all(|(i, card)| i32::from(card.value()) == start - i as i32);

    if consecutive {
        cards.to_vec()
    } else {
        Vec::new()
    }
}

fn match_two_pair(cards: &[Card]) -> Vec<Card> {
    let mut matched = Vec::with_capacity(4);
    let mut pairs = 0;

    let mut i = 0;
    while i + 1 < cards.len() {
        if same_value(&cards[i..i + 2]) {
            matched.extend_from_slice(&cards[i..i + 2]);
            pairs += 1;
            i += 2;
        } else {
            i += 1;
        }
    }

    if pairs == 2 {
        matched
    } else {
        Vec::new()
    }
}
