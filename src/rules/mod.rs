//! Game outcome and end-of-game scoring.
//!
//! The win/loss value the search optimizes lives on
//! [`GameState::evaluate`](crate::core::GameState::evaluate); the point
//! totals reported when a game ends are computed here.

pub mod outcome;

pub use outcome::{FinalScore, Winner};
