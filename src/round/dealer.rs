use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, instrument};

use super::roster::{Player, Roster, RosterError};
use crate::cards::Card;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("Deck is empty")]
    Empty,
    #[error("Not enough cards in deck: requested {requested}, {remaining} left")]
    NotEnoughCards { requested: usize, remaining: usize },
}

/// Draw supply. The end of the vector is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The 52-card deck, unshuffled.
    pub fn standard() -> Self {
        Self {
            cards: Card::all_cards(),
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Draws `count` cards, top card first. Nothing is drawn if the deck
    /// holds fewer than `count`.
    pub fn draw_many(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::NotEnoughCards {
                requested: count,
                remaining: self.cards.len(),
            });
        }

        let mut drawn = self.cards.split_off(self.cards.len() - count);
        drawn.reverse();
        Ok(drawn)
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }
}

/// Discarded cards waiting to go back into the deck.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

pub struct Dealer {
    deck: Deck,
    pile: Pile,
    rng: StdRng,
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}

impl Dealer {
    /// A dealer with a freshly shuffled deck and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// A dealer whose shuffles are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);
        Self {
            deck,
            pile: Pile::new(),
            rng,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    /// Deals `count` cards to every player, one card at a time around the
    /// table. Fails without dealing anything if the deck is too short.
    #[instrument(skip(self, roster), fields(players = roster.len()))]
    pub fn deal(&mut self, count: usize, roster: &mut Roster) -> Result<(), DeckError> {
        let remaining = self.deck.len();
        let needed = count
            .checked_mul(roster.len())
            .ok_or(DeckError::NotEnoughCards {
                requested: usize::MAX,
                remaining,
            })?;
        if needed > remaining {
            return Err(DeckError::NotEnoughCards {
                requested: needed,
                remaining,
            });
        }

        for _ in 0..count {
            for player in roster.players_mut() {
                let card = self.deck.draw()?;
                player.cards.push(card);
            }
        }

        debug!(remaining = self.deck.len(), "Dealt cards");
        Ok(())
    }

    /// Discards the cards at `indices` to the pile and replaces each one in
    /// place with a card from the deck. Indices past the end of the hand are
    /// ignored; repeated indices count once. Returns the discarded cards.
    #[instrument(skip(self, player), fields(player = %player.name))]
    pub fn exchange(
        &mut self,
        player: &mut Player,
        indices: &[usize],
    ) -> Result<Vec<Card>, DeckError> {
        let mut indices: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&index| index < player.cards.len())
            .collect();
        indices.sort_unstable();
        indices.dedup();

        let replacements = self.deck.draw_many(indices.len())?;
        let discarded: Vec<Card> = indices
            .iter()
            .zip(replacements)
            .map(|(&index, replacement)| std::mem::replace(&mut player.cards[index], replacement))
            .collect();

        self.pile.add_cards(discarded.iter().copied());
        debug!(discarded = discarded.len(), "Exchanged cards");
        Ok(discarded)
    }

    /// Moves every player's cards onto the pile.
    pub fn collect(&mut self, roster: &mut Roster) -> Result<(), RosterError> {
        for player in roster.players_mut() {
            let held = player.cards.len();
            self.pile.add_cards(player.take_cards(held)?);
        }
        Ok(())
    }

    /// Returns the pile to the deck and reshuffles.
    pub fn restock(&mut self) {
        let returned = self.pile.take_all();
        debug!(returned = returned.len(), "Restocking deck");
        self.deck.add_cards(returned);
        self.deck.shuffle(&mut self.rng);
    }
}
