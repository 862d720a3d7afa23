//! # marbles
//!
//! Red/blue marbles: a two-player, perfect-information game and a minimax
//! opponent that plays it.
//!
//! ## Rules
//!
//! Two piles, red and blue. On each turn a player removes two or one
//! marbles from a single pile. The game ends as soon as either pile is
//! empty. Who wins at that point depends on the variant:
//!
//! - **Standard**: the side that empties a pile wins
//! - **Misere**: the side that empties a pile loses
//!
//! ## Architecture
//!
//! - **Make/undo search**: one `GameState` is mutated in place by the
//!   search; `ScopedMove` guards restore it on every exit path.
//!
//! - **Explicit configuration**: pile sizes, variant, first player and
//!   depth are captured once in a `GameConfig`. No global state.
//!
//! ## Modules
//!
//! - `core`: sides, moves, configuration, game state
//! - `rules`: end-of-game scoring
//! - `search`: minimax with alpha-beta pruning
//! - `cli`: argument parsing and the interactive game loop
//!
//! ## Example
//!
//! ```
//! use marbles::{new_game, Side};
//!
//! let (mut state, mut engine) = new_game(3, 4, "standard", "computer", None).unwrap();
//! assert_eq!(state.side_to_move(), Side::Computer);
//!
//! let mv = engine.best_move(&mut state).unwrap();
//! state.apply_move(mv);
//! state.pass_turn();
//! ```

pub mod core;
pub mod rules;
pub mod search;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Side, Move, MoveList,
    Depth, GameConfig, Variant,
    GameState, ScopedMove,
};

pub use crate::rules::{FinalScore, Winner};

pub use crate::search::{Minimax, SearchConfig, SearchResult, SearchStats};

pub use crate::error::{Error, Result};

/// Start a game from collaborator-supplied parameters.
///
/// `variant` is `"standard"` or `"misere"`, `first_player` is `"human"` or
/// `"computer"`. `depth` of `None` searches to the end of the game;
/// non-positive depths evaluate the position immediately. Unknown strings
/// are rejected before any state is built.
pub fn new_game(
    red: u32,
    blue: u32,
    variant: &str,
    first_player: &str,
    depth: Option<i64>,
) -> Result<(GameState, Minimax)> {
    let config = GameConfig::new(red, blue)
        .with_variant(variant.parse()?)
        .with_first_player(first_player.parse()?)
        .with_depth(depth.map_or(Depth::Unbounded, Depth::from_plies));

    tracing::debug!(?config, "new game");

    Ok((config.new_state(), Minimax::new(config.search_config())))
}
