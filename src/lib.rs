// Library crate for the five-card showdown engine
// Classification, tie-breaking and arbitration live in `cards` and `round`

pub mod cards;
pub mod config;
pub mod round;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use cards::{Card, ClassifiedHand, HandCategory, Outcome, Rank, Suit};
pub use config::{OutputFormat, ShowdownConfig};
pub use round::{
    play_round, run_showdown, Contender, Dealer, Player, Roster, RoundArbiter, RoundReport, TiePolicy,
};
pub use shared::ShowdownError;
