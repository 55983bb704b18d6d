use thiserror::Error;

use crate::cards::HandError;
use crate::config::ConfigError;
use crate::round::{ArbiterError, DeckError, RosterError};

/// Top-level error for everything above a single module.
#[derive(Error, Debug)]
pub enum ShowdownError {
    #[error("Hand error: {0}")]
    Hand(#[from] HandError),

    #[error("Arbitration error: {0}")]
    Arbiter(#[from] ArbiterError),

    #[error("Deck error: {0}")]
    Deck(#[from] DeckError),

    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
