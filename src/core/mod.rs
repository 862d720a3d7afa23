//! Core game types: sides, moves, configuration and state.
//!
//! Pure data and transition logic. No I/O happens in this module.

pub mod side;
pub mod moves;
pub mod config;
pub mod state;

pub use side::Side;
pub use moves::{Move, MoveList};
pub use config::{Depth, GameConfig, Variant};
pub use state::{GameState, ScopedMove, LOSS, NEUTRAL, WIN};
