use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{sort_showdown, Card};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("A round needs 2-5 players, got {0}")]
    PlayerCount(usize),
    #[error("Player names must not be empty")]
    InvalidName,
    #[error("Duplicate player name: {0}")]
    DuplicateName(String),
    #[error("{name} holds {held} cards, cannot take {requested}")]
    NotEnoughCards {
        name: String,
        held: usize,
        requested: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub cards: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Takes the first `count` cards from the hand.
    pub fn take_cards(&mut self, count: usize) -> Result<Vec<Card>, RosterError> {
        if count > self.cards.len() {
            return Err(RosterError::NotEnoughCards {
                name: self.name.clone(),
                held: self.cards.len(),
                requested: count,
            });
        }
        Ok(self.cards.drain(..count).collect())
    }

    pub fn sorted_cards(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        sort_showdown(&mut cards);
        cards
    }

    /// Sum of the held card values.
    pub fn total(&self) -> u32 {
        self.cards.iter().map(|card| u32::from(card.value())).sum()
    }
}

/// The players taking part in a round. Owned by the caller and passed
/// explicitly to every round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| Into::<String>::into(name).trim().to_string())
            .collect();

        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(RosterError::PlayerCount(names.len()));
        }

        {
            let mut seen = HashSet::new();
            for name in &names {
                if name.is_empty() {
                    return Err(RosterError::InvalidName);
                }
                if !seen.insert(name.as_str()) {
                    return Err(RosterError::DuplicateName(name.clone()));
                }
            }
        }

        Ok(Self {
            players: names.into_iter().map(Player::new).collect(),
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.name == name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
