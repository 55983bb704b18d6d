use std::cmp::Ordering;

use super::hands::ClassifiedHand;

/// Result of comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    First,
    Second,
    /// Nothing in the matched cards separates the hands.
    Unresolved,
}

/// Breaks a tie between two hands of the same category.
///
/// Matched cards are walked by value first; the first differing value
/// decides. If every value is equal, only the suits at index 0 are compared
/// (stronger canonical suit wins) and later suits are never looked at.
/// Equal suits there leave the tie unresolved.
///
/// Kickers are not part of the matched cards and so never count.
pub fn break_tie(first: &ClassifiedHand, second: &ClassifiedHand) -> Outcome {
    for (a, b) in first.matched.iter().zip(&second.matched) {
        match a.rank.cmp(&b.rank) {
            Ordering::Equal => continue,
            Ordering::Greater => return Outcome::First,
            Ordering::Less => return Outcome::Second,
        }
    }

    match (first.matched.first(), second.matched.first()) {
        (Some(a), Some(b)) => match a.suit.canonical_index().cmp(&b.suit.canonical_index()) {
            Ordering::Less => Outcome::First,
            Ordering::Greater => Outcome::Second,
            Ordering::Equal => Outcome::Unresolved,
        },
        _ => Outcome::Unresolved,
    }
}
