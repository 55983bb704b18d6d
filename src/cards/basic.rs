use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("Invalid suit: {0:?}")]
    InvalidSuit(String),
    #[error("Invalid card value: {0} (expected 2-14)")]
    InvalidValue(u8),
    #[error("Invalid card notation: {0:?}")]
    InvalidNotation(String),
}

/// Suits are declared in canonical showdown order: Spades first, Clubs last.
/// The discriminant grows with strength so that `Ord` agrees with that order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Suit {
    Spades = 3,
    Hearts = 2,
    Diamonds = 1,
    Clubs = 0,
}

impl Suit {
    /// Position in `[S, H, D, C]`; 0 is the strongest suit.
    pub fn canonical_index(self) -> u8 {
        3 - self as u8
    }

    pub fn letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'S' => Ok(Suit::Spades),
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            _ => Err(CardError::InvalidSuit(c.to_string())),
        }
    }
}

impl TryFrom<&str> for Suit {
    type Error = CardError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::try_from(c),
            _ => Err(CardError::InvalidSuit(s.to_string())),
        }
    }
}

/// Card value. Aces are always high (14); there is no low ace.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::iter()
            .find(|rank| rank.value() == value)
            .ok_or(CardError::InvalidValue(value))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A playing card. `Ord` ranks by value, then by suit strength, so the
/// strongest card is the greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.rank.cmp(&other.rank) {
            Ordering::Equal => self.suit.cmp(&other.suit),
            other => other,
        }
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Builds a card from a suit letter and a numeric value, validating both.
    pub fn try_new(suit: char, value: u8) -> Result<Self, CardError> {
        Ok(Self::new(Rank::try_from(value)?, Suit::try_from(suit)?))
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    /// All 52 cards, suits in canonical order and values ascending.
    pub fn all_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

/// Parses the `S14` / `h9` / `D10` notation: a suit letter followed by a value.
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars
            .next()
            .ok_or_else(|| CardError::InvalidNotation(s.to_string()))?;
        let digits = chars.as_str();
        // Plain decimal digits only, no sign and no leading zero.
        if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CardError::InvalidNotation(s.to_string()));
        }
        let value: u8 = digits
            .parse()
            .map_err(|_| CardError::InvalidNotation(s.to_string()))?;

        Card::try_new(suit, value)
    }
}

/// Showdown comparator: `Less` means `a` sorts before `b`.
///
/// Higher values come first; equal values fall back to the canonical suit
/// order `[S, H, D, C]`.
pub fn showdown_order(a: &Card, b: &Card) -> Ordering {
    b.cmp(a)
}

pub fn sort_showdown(cards: &mut [Card]) {
    cards.sort_by(showdown_order);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_ordering() {
        let two_clubs = Card::new(Rank::Two, Suit::Clubs);
        let two_spades = Card::new(Rank::Two, Suit::Spades);
        let ace_clubs = Card::new(Rank::Ace, Suit::Clubs);

        assert!(two_spades > two_clubs); // Same value, stronger suit
        assert!(ace_clubs > two_spades); // Value beats suit
        assert_eq!(showdown_order(&ace_clubs, &two_spades), Ordering::Less);
        assert_eq!(showdown_order(&two_spades, &two_clubs), Ordering::Less);
    }

    #[test]
    fn test_canonical_suit_order() {
        let order: Vec<Suit> = Suit::iter().collect();
        assert_eq!(
            order,
            vec![Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
        );

        for (index, suit) in order.iter().enumerate() {
            assert_eq!(suit.canonical_index() as usize, index);
        }
    }

    #[test]
    fn test_sort_showdown() {
        let mut cards = vec![
            Card::new(Rank::Four, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Clubs),
            Card::new(Rank::Four, Suit::Spades),
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Diamonds),
        ];
        sort_showdown(&mut cards);

        let rendered: Vec<String> = cards.iter().map(Card::to_string).collect();
        assert_eq!(rendered, vec!["H9", "D9", "C9", "S4", "H4"]);
    }

    #[test]
    fn test_card_from_str() {
        let ace_spades: Card = "S14".parse().unwrap();
        assert_eq!(ace_spades, Card::new(Rank::Ace, Suit::Spades));

        let ten_diamonds: Card = "d10".parse().unwrap();
        assert_eq!(ten_diamonds, Card::new(Rank::Ten, Suit::Diamonds));

        assert_eq!(
            "X9".parse::<Card>(),
            Err(CardError::InvalidSuit("X".to_string()))
        );
        assert_eq!("S15".parse::<Card>(), Err(CardError::InvalidValue(15)));
        assert_eq!("H1".parse::<Card>(), Err(CardError::InvalidValue(1)));
        assert!(matches!(
            "S".parse::<Card>(),
            Err(CardError::InvalidNotation(_))
        ));
        assert!(matches!(
            "".parse::<Card>(),
            Err(CardError::InvalidNotation(_))
        ));
    }

    #[test]
    fn test_card_from_str_requires_plain_digits() {
        for notation in ["S+9", "S014", "H 9", "D-2", "C1O"] {
            assert_eq!(
                notation.parse::<Card>(),
                Err(CardError::InvalidNotation(notation.to_string())),
                "{notation}"
            );
        }
        assert_eq!("S9".parse::<Card>(), Ok(Card::new(Rank::Nine, Suit::Spades)));
    }

    #[test]
    fn test_card_try_new() {
        assert_eq!(
            Card::try_new('h', 11),
            Ok(Card::new(Rank::Jack, Suit::Hearts))
        );
        assert_eq!(Card::try_new('S', 0), Err(CardError::InvalidValue(0)));
        assert_eq!(
            Card::try_new('Z', 5),
            Err(CardError::InvalidSuit("Z".to_string()))
        );
    }

    #[test]
    fn test_suit_try_from_str() {
        assert_eq!(Suit::try_from("S"), Ok(Suit::Spades));
        assert_eq!(Suit::try_from("c"), Ok(Suit::Clubs));
        assert!(Suit::try_from("").is_err());
        assert!(Suit::try_from("SS").is_err());
    }

    #[test]
    fn test_card_display_round_trips() {
        for card in Card::all_cards() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }
    }

    #[test]
    fn test_all_cards() {
        let cards = Card::all_cards();
        assert_eq!(cards.len(), 52);
        assert_eq!(cards[0], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(cards[51], Card::new(Rank::Ace, Suit::Clubs));
    }
}
