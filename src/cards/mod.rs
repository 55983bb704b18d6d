pub mod basic;
pub mod hands;
pub mod tiebreak;


pub use basic::{showdown_order, sort_showdown, Card, CardError, Rank, Suit};
pub use hands::{ClassifiedHand, HandCategory, HandError, HAND_SIZE};
pub use tiebreak::{break_tie, Outcome};
