use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::round::{Dealer, Roster, RosterError, RoundArbiter, TiePolicy};

pub const PLAYERS_VAR: &str = "SHOWDOWN_PLAYERS";
pub const ROUNDS_VAR: &str = "SHOWDOWN_ROUNDS";
pub const SEED_VAR: &str = "SHOWDOWN_SEED";
pub const TIE_POLICY_VAR: &str = "SHOWDOWN_TIE_POLICY";
pub const FORMAT_VAR: &str = "SHOWDOWN_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(other.to_string()),
        }
    }
}

/// Runtime settings for the `showdown` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowdownConfig {
    pub players: Vec<String>,
    pub rounds: usize,
    pub seed: Option<u64>,
    pub tie_policy: TiePolicy,
    pub format: OutputFormat,
}

impl Default for ShowdownConfig {
    fn default() -> Self {
        Self {
            players: vec!["Player 1".to_string(), "Player 2".to_string()],
            rounds: 1,
            seed: None,
            tie_policy: TiePolicy::default(),
            format: OutputFormat::default(),
        }
    }
}

impl ShowdownConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(players) = lookup(PLAYERS_VAR) {
            config.players = players
                .split(',')
                .map(|name| name.trim().to_string())
                .collect();
        }

        if let Some(rounds) = lookup(ROUNDS_VAR) {
            config.rounds = parse_var(ROUNDS_VAR, &rounds)?;
            if config.rounds == 0 {
                return Err(ConfigError::InvalidValue {
                    key: ROUNDS_VAR,
                    value: rounds,
                });
            }
        }

        if let Some(seed) = lookup(SEED_VAR) {
            config.seed = Some(parse_var(SEED_VAR, &seed)?);
        }

        if let Some(policy) = lookup(TIE_POLICY_VAR) {
            config.tie_policy = parse_var(TIE_POLICY_VAR, &policy)?;
        }

        if let Some(format) = lookup(FORMAT_VAR) {
            config.format = parse_var(FORMAT_VAR, &format)?;
        }

        Ok(config)
    }

    pub fn roster(&self) -> Result<Roster, RosterError> {
        Roster::new(self.players.iter().cloned())
    }

    pub fn dealer(&self) -> Dealer {
        match self.seed {
            Some(seed) => Dealer::with_seed(seed),
            None => Dealer::new(),
        }
    }

    pub fn arbiter(&self) -> RoundArbiter {
        RoundArbiter::new(self.tie_policy)
    }
}

fn parse_var<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
