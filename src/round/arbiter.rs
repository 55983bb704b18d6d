use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::cards::{break_tie, ClassifiedHand, Outcome};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArbiterError {
    #[error("No contenders to arbitrate")]
    EmptyInput,
    #[error("Unresolved tie between seat {incumbent} and seat {challenger}")]
    TieUnresolved { incumbent: usize, challenger: usize },
}

/// What to do when two hands cannot be separated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TiePolicy {
    /// Keep the current best and record the challenger in the verdict.
    #[default]
    KeepIncumbent,
    /// Abort arbitration with `ArbiterError::TieUnresolved`.
    Fail,
}

impl FromStr for TiePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" | "keep-incumbent" => Ok(TiePolicy::KeepIncumbent),
            "fail" => Ok(TiePolicy::Fail),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for TiePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiePolicy::KeepIncumbent => write!(f, "keep"),
            TiePolicy::Fail => write!(f, "fail"),
        }
    }
}

/// A player together with the hand they hold this round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contender<P> {
    pub player: P,
    pub hand: ClassifiedHand,
}

impl<P> Contender<P> {
    pub fn new(player: P, hand: ClassifiedHand) -> Self {
        Self { player, hand }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict<'a, P> {
    pub winner: &'a Contender<P>,
    /// Position of the winner in the arbitrated slice.
    pub seat: usize,
    /// Contenders the winner could not be separated from.
    pub unresolved: Vec<&'a Contender<P>>,
}

/// Decides the winner of a round. Holds nothing but its tie policy, so one
/// arbiter can serve any number of rounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundArbiter {
    tie_policy: TiePolicy,
}

impl RoundArbiter {
    pub fn new(tie_policy: TiePolicy) -> Self {
        Self { tie_policy }
    }

    pub fn tie_policy(&self) -> TiePolicy {
        self.tie_policy
    }

    /// Compares two hands: a better category wins outright, equal categories
    /// go to the tie-breaker.
    pub fn compare(first: &ClassifiedHand, second: &ClassifiedHand) -> Outcome {
        if first.category.beats(second.category) {
            Outcome::First
        } else if second.category.beats(first.category) {
            Outcome::Second
        } else {
            break_tie(first, second)
        }
    }

    /// Folds the contenders left to right, starting from the first one, and
    /// returns whoever is best at the end.
    pub fn winner<'a, P>(
        &self,
        contenders: &'a [Contender<P>],
    ) -> Result<Verdict<'a, P>, ArbiterError> {
        let (first, rest) = contenders.split_first().ok_or(ArbiterError::EmptyInput)?;

        let mut verdict = Verdict {
            winner: first,
            seat: 0,
            unresolved: Vec::new(),
        };

        for (offset, challenger) in rest.iter().enumerate() {
            let seat = offset + 1;
            match Self::compare(&verdict.winner.hand, &challenger.hand) {
                Outcome::First => {}
                Outcome::Second => {
                    debug!(from = verdict.seat, to = seat, "New best hand");
                    verdict.winner = challenger;
                    verdict.seat = seat;
                    verdict.unresolved.clear();
                }
                Outcome::Unresolved => match self.tie_policy {
                    TiePolicy::KeepIncumbent => {
                        warn!(
                            incumbent = verdict.seat,
                            challenger = seat,
                            "Unresolved tie, keeping current best"
                        );
                        verdict.unresolved.push(challenger);
                    }
                    TiePolicy::Fail => {
                        return Err(ArbiterError::TieUnresolved {
                            incumbent: verdict.seat,
                            challenger: seat,
                        });
                    }
                },
            }
        }

        Ok(verdict)
    }
}
