//! Game-tree search for the computer player.
//!
//! ## Overview
//!
//! Depth-limited minimax with alpha-beta pruning over a single mutable
//! [`GameState`](crate::core::GameState):
//!
//! - **Make/undo**: children are explored in place and restored on return,
//!   never copied
//! - **Fixed move order**: ties are broken by enumeration order
//! - **Configurable depth**: finite depths score unfinished lines as 0,
//!   which makes shallow searches weaker players
//!
//! ## Usage
//!
//! ```rust
//! use marbles::core::{Depth, GameState, Side, Variant};
//! use marbles::search::{Minimax, SearchConfig};
//!
//! let mut state = GameState::new(5, 7, Variant::Standard, Side::Computer);
//! let mut engine = Minimax::new(SearchConfig::default().with_depth(Depth::Plies(4)));
//!
//! let result = engine.search(&mut state);
//! assert!(result.best_move.is_some());
//! println!("{} nodes, value {}", result.stats.nodes, result.value);
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

pub use config::SearchConfig;
pub use minimax::{Minimax, SearchResult, INF};
pub use stats::SearchStats;
