pub mod arbiter;
pub mod dealer;
pub mod report;
pub mod roster;

pub use arbiter::{ArbiterError, Contender, RoundArbiter, TiePolicy, Verdict};
pub use dealer::{Dealer, Deck, DeckError, Pile};
pub use report::{play_round, run_showdown, RoundReport, Standing};
pub use roster::{Player, Roster, RosterError, MAX_PLAYERS, MIN_PLAYERS};
