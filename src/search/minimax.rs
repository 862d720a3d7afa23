//! Depth-limited minimax with alpha-beta pruning.
//!
//! The computer is the maximizing side and the human the minimizing side;
//! every value is on that single scale (see [`GameState::evaluate_for`]).
//! A leaf is scored for the side whose move produced it: the side that
//! empties a pile wins in Standard and loses in Misere.
//! Children are visited in [`GameState::available_moves`] order by applying
//! the move in place through a [`ScopedMove`](crate::core::ScopedMove)
//! guard, so the state is restored when the guard drops, including when a
//! cutoff breaks out of the loop.
//!
//! # Example
//!
//! ```
//! use marbles::core::{GameState, Side, Variant};
//! use marbles::search::{Minimax, SearchConfig};
//!
//! let mut state = GameState::new(1, 2, Variant::Standard, Side::Computer);
//! let mut engine = Minimax::new(SearchConfig::default());
//!
//! if let Some(mv) = engine.best_move(&mut state) {
//!     state.apply_move(mv);
//!     println!("Computer moves: {}", mv);
//! }
//! ```

use std::time::Instant;

use tracing::{debug, info, trace};

use crate::core::{Depth, GameState, Move, Side, WIN};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Bound above every evaluation.
pub const INF: i32 = WIN + 1;

/// Outcome of a root search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move for the side to move, `None` at a terminal root.
    pub best_move: Option<Move>,
    /// Value of `best_move` on the computer's scale.
    pub value: i32,
    /// Search diagnostics.
    pub stats: SearchStats,
}

/// Minimax search engine.
///
/// Owns its configuration and the statistics of the last search. The
/// position is borrowed mutably for the duration of a call and handed back
/// unchanged.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    /// Create a new search engine.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Value of `state` with `maximizing` telling whether the computer is to move.
    ///
    /// Returns `state.evaluate_for(..)` for the side that moved into `state`
    /// once `depth` is exhausted or the position is terminal. Otherwise recurses into every legal move,
    /// narrowing `[alpha, beta]` and stopping early once `beta <= alpha`
    /// (when pruning is enabled). Start with `(-INF, INF)`.
    pub fn minimax(
        &mut self,
        state: &mut GameState,
        depth: Depth,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.alpha_beta(state, depth, alpha, beta, maximizing, 0)
    }

    /// Pick the move for `state.side_to_move()`.
    ///
    /// Returns `None` only when the position is already terminal; callers
    /// should check [`GameState::is_terminal`] first.
    pub fn best_move(&mut self, state: &mut GameState) -> Option<Move> {
        self.search(state).best_move
    }

    /// Search every root move and return the best one with its value.
    ///
    /// Each candidate is searched with a fresh `(-INF, INF)` window. The
    /// computer keeps the first strictly greater value, the human the first
    /// strictly smaller one, so ties go to the earliest move in
    /// enumeration order.
    pub fn search(&mut self, state: &mut GameState) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();
        self.stats.visit(0);

        let side = state.side_to_move();
        let child_depth = self.config.depth.child();
        let mut best_move = None;
        let mut best_value = if side.is_maximizer() { -INF } else { INF };

        for mv in state.available_moves() {
            let mut child = state.scoped(mv);
            let value = self.alpha_beta(&mut child, child_depth, -INF, INF, !side.is_maximizer(), 1);
            drop(child);

            debug!(%side, %mv, value, "root move searched");

            let improves = match side {
                Side::Computer => value > best_value,
                Side::Human => value < best_value,
            };
            if improves {
                best_value = value;
                best_move = Some(mv);
            }
        }

        if best_move.is_none() {
            self.stats.leaves += 1;
            best_value = state.evaluate_for(side.opponent());
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        info!(
            %side,
            best_move = ?best_move,
            value = best_value,
            depth = %self.config.depth,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            nps = self.stats.nodes_per_second(),
            "search finished"
        );

        SearchResult {
            best_move,
            value: best_value,
            stats: self.stats.clone(),
        }
    }

    fn alpha_beta(
        &mut self,
        state: &mut GameState,
        depth: Depth,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        ply: u32,
    ) -> i32 {
        self.stats.visit(ply);

        if depth.is_exhausted() || state.is_terminal() {
            self.stats.leaves += 1;
            // `maximizing` is the side to move here; the opposite side moved last.
            return state.evaluate_for(Side::from_maximizing(!maximizing));
        }

        let mut best = if maximizing { -INF } else { INF };

        for mv in state.available_moves() {
            let mut child = state.scoped(mv);
            let value = self.alpha_beta(&mut child, depth.child(), alpha, beta, !maximizing, ply + 1);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }

            if self.config.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                trace!(ply, %mv, alpha, beta, "cutoff");
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Variant, LOSS, NEUTRAL};

    fn engine() -> Minimax {
        Minimax::new(SearchConfig::default())
    }

    fn state(red: u32, blue: u32, variant: Variant, side: Side) -> GameState {
        GameState::new(red, blue, variant, side)
    }

    #[test]
    fn test_terminal_root_has_no_move() {
        // The human emptied the red pile, so the human has won.
        let mut s = state(0, 4, Variant::Standard, Side::Computer);
        let result = engine().search(&mut s);
        assert_eq!(result.best_move, None);
        assert_eq!(result.value, LOSS);
    }

    #[test]
    fn test_zero_depth_evaluates_immediately() {
        let mut s = state(3, 3, Variant::Standard, Side::Computer);
        let mut e = engine();
        let value = e.minimax(&mut s, Depth::Plies(0), -INF, INF, true);
        assert_eq!(value, NEUTRAL);
        assert_eq!(e.stats().nodes, 1);
    }

    #[test]
    fn test_single_move_to_terminal() {
        // (1, 1): whatever the computer takes, it empties a pile.
        let mut s = state(1, 1, Variant::Standard, Side::Computer);
        let mut e = engine();
        let value = e.minimax(&mut s, Depth::Unbounded, -INF, INF, true);
        assert_eq!(value, WIN);

        let mut s = state(1, 1, Variant::Misere, Side::Computer);
        assert_eq!(e.minimax(&mut s, Depth::Unbounded, -INF, INF, true), LOSS);
    }

    #[test]
    fn test_standard_takes_immediate_win() {
        // From (1, 2) taking both blues empties a pile at once.
        let mut s = state(1, 2, Variant::Standard, Side::Computer);
        let result = engine().search(&mut s);
        assert_eq!(result.best_move, Some(Move::TakeBlue2));
        assert_eq!(result.value, WIN);
        assert_eq!((s.red(), s.blue()), (1, 2));
    }

    #[test]
    fn test_misere_avoids_emptying_a_pile() {
        // Only taking one blue leaves the human at (1, 1), where every reply
        // empties a pile. It is last in move order.
        let mut s = state(1, 2, Variant::Misere, Side::Computer);
        let result = engine().search(&mut s);
        assert_eq!(result.best_move, Some(Move::TakeBlue1));
        assert_eq!(result.value, WIN);
    }

    #[test]
    fn test_human_side_minimizes() {
        let mut s = state(1, 2, Variant::Standard, Side::Human);
        let result = engine().search(&mut s);
        assert_eq!(result.best_move, Some(Move::TakeBlue2));
        assert_eq!(result.value, LOSS);
    }

    #[test]
    fn test_ties_keep_first_move() {
        // Misere (2, 2): every move loses for the computer, so the first is returned.
        let mut s = state(2, 2, Variant::Misere, Side::Computer);
        let result = engine().search(&mut s);
        assert_eq!(result.best_move, Some(Move::TakeRed2));
        assert_eq!(result.value, LOSS);
    }

    #[test]
    fn test_depth_limit_falls_back_to_neutral() {
        let mut s = state(6, 6, Variant::Standard, Side::Computer);
        let mut e = Minimax::new(SearchConfig::default().with_depth(Depth::Plies(1)));
        let result = e.search(&mut s);
        assert_eq!(result.value, NEUTRAL);
        assert_eq!(result.best_move, Some(Move::TakeRed2));
        assert_eq!(result.stats.max_ply, 1);
    }

    #[test]
    fn test_pruning_saves_nodes() {
        let mut s = state(5, 5, Variant::Standard, Side::Computer);
        let mut pruned = engine();
        let mut full = Minimax::new(SearchConfig::default().with_pruning(false));

        let a = pruned.search(&mut s);
        let b = full.search(&mut s);

        assert_eq!(a.value, b.value);
        assert_eq!(a.best_move, b.best_move);
        assert!(a.stats.nodes < b.stats.nodes);
        assert_eq!(b.stats.cutoffs, 0);
    }

    #[test]
    fn test_search_restores_state() {
        let mut s = state(4, 5, Variant::Misere, Side::Human);
        let before = s.clone();
        engine().search(&mut s);
        assert_eq!(s, before);
    }
}
