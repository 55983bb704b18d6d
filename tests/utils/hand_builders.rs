use showdown::{Card, ClassifiedHand, Contender, Roster};

// ============================================================================
// Card Creation Macro
// ============================================================================

/// `hand![S 14, H 9, D 10]` builds a `Vec<Card>` from suit letters and values.
#[macro_export]
macro_rules! hand {
    ($($suit:ident $value:literal),* $(,)?) => {
        vec![$(
            showdown::Card::try_new(stringify!($suit).chars().next().unwrap(), $value)
                .expect("valid card")
        ),*]
    };
}

// ============================================================================
// Showdown Setup Utilities
// ============================================================================

pub fn classified(cards: &[Card]) -> ClassifiedHand {
    ClassifiedHand::classify(cards).expect("hand should classify")
}

/// Pairs each name with its classified hand, in order.
pub fn contenders<'a>(hands: &[(&'a str, Vec<Card>)]) -> Vec<Contender<&'a str>> {
    hands
        .iter()
        .map(|(name, cards)| Contender::new(*name, classified(cards)))
        .collect()
}

/// Replaces the named player's cards with a fixed hand.
pub fn seat_cards(roster: &mut Roster, name: &str, cards: Vec<Card>) {
    roster
        .player_mut(name)
        .expect("player should be seated")
        .cards = cards;
}
