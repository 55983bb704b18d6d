use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::arbiter::{Contender, RoundArbiter};
use super::dealer::Dealer;
use super::roster::Roster;
use crate::cards::{Card, ClassifiedHand, HandCategory, HAND_SIZE};
use crate::shared::ShowdownError;

/// One player's result for a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub cards: Vec<Card>,
    pub category: HandCategory,
    pub category_name: String,
    pub matched: Vec<Card>,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub standings: Vec<Standing>,
    pub winner: String,
    /// Players the winner tied with and could not be separated from.
    pub unresolved: Vec<String>,
}

impl RoundReport {
    pub fn winning_standing(&self) -> Option<&Standing> {
        self.standings.iter().find(|s| s.name == self.winner)
    }
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for standing in &self.standings {
            writeln!(f, "Player : {}", standing.name)?;
            writeln!(f, "Hand   : {}", standing.category_name)?;
            writeln!(f, "Cards  : {}", join_cards(&standing.cards))?;
            writeln!(f, "Match  : {}", join_cards(&standing.matched))?;
            writeln!(f, "Total  : {}", standing.total)?;
            writeln!(f)?;
        }
        write!(f, "Winner is : {}", self.winner)?;
        if !self.unresolved.is_empty() {
            write!(f, " (unresolved tie with {})", self.unresolved.join(", "))?;
        }
        Ok(())
    }
}

/// Classifies every player's current hand and picks the winner. Does not
/// touch the cards.
pub fn run_showdown(roster: &Roster, arbiter: &RoundArbiter) -> Result<RoundReport, ShowdownError> {
    let contenders = roster
        .players()
        .iter()
        .map(|player| {
            ClassifiedHand::classify(&player.cards).map(|hand| Contender::new(player, hand))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let verdict = arbiter.winner(&contenders)?;

    let standings = contenders
        .iter()
        .map(|contender| Standing {
            name: contender.player.name.clone(),
            cards: contender.player.sorted_cards(),
            category: contender.hand.category,
            category_name: contender.hand.category_name().to_string(),
            matched: contender.hand.matched.clone(),
            total: contender.player.total(),
        })
        .collect();

    Ok(RoundReport {
        standings,
        winner: verdict.winner.player.name.clone(),
        unresolved: verdict
            .unresolved
            .iter()
            .map(|contender| contender.player.name.clone())
            .collect(),
    })
}

/// Plays a full round: clears the table, restocks if the deck is short,
/// deals five cards to everyone and runs the showdown.
#[instrument(skip_all, fields(players = roster.len()))]
pub fn play_round(
    roster: &mut Roster,
    dealer: &mut Dealer,
    arbiter: &RoundArbiter,
) -> Result<RoundReport, ShowdownError> {
    dealer.collect(roster)?;
    if dealer.deck().len() < HAND_SIZE * roster.len() {
        dealer.restock();
    }

    dealer.deal(HAND_SIZE, roster)?;
    let report = run_showdown(roster, arbiter)?;

    info!(winner = %report.winner, unresolved = report.unresolved.len(), "Round finished");
    Ok(report)
}
