#[macro_use]
pub mod hand_builders;

#[allow(unused_imports)]
pub use hand_builders::{classified, contenders, seat_cards};
