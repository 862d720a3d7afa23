//! Game state: two marble piles plus the rules they are played under.
//!
//! ## Make/undo
//!
//! The search does not copy states. It mutates one `GameState` in place:
//! [`GameState::apply_move`] removes marbles and [`GameState::undo_move`]
//! puts them back. Calls must nest strictly (last applied, first undone).
//! [`ScopedMove`] enforces that by undoing the move when it is dropped, so
//! every exit path of a search frame (including a pruning `break`) restores
//! the piles.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use super::config::Variant;
use super::moves::{Move, MoveList};
use super::side::Side;
use crate::error::{Error, Result};

/// Evaluation of a won position for the computer.
pub const WIN: i32 = 1;

/// Evaluation of a lost position for the computer.
pub const LOSS: i32 = -WIN;

/// Evaluation of non-terminal positions.
pub const NEUTRAL: i32 = 0;

/// Marble counts and rules for one game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    red: u32,
    blue: u32,
    initial_red: u32,
    initial_blue: u32,
    variant: Variant,
    side_to_move: Side,
}

impl GameState {
    /// Create a game with full piles.
    #[must_use]
    pub fn new(red: u32, blue: u32, variant: Variant, first_player: Side) -> Self {
        Self {
            red,
            blue,
            initial_red: red,
            initial_blue: blue,
            variant,
            side_to_move: first_player,
        }
    }

    /// Red marbles left.
    #[must_use]
    pub fn red(&self) -> u32 {
        self.red
    }

    /// Blue marbles left.
    #[must_use]
    pub fn blue(&self) -> u32 {
        self.blue
    }

    /// Red marbles at the start of the game.
    #[must_use]
    pub fn initial_red(&self) -> u32 {
        self.initial_red
    }

    /// Blue marbles at the start of the game.
    #[must_use]
    pub fn initial_blue(&self) -> u32 {
        self.initial_blue
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Side whose turn it is in the real game.
    ///
    /// Not changed by `apply_move`; the driving loop calls [`pass_turn`](Self::pass_turn).
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Hand the turn to the other side.
    pub fn pass_turn(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Marbles left in both piles.
    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.red) + u64::from(self.blue)
    }

    /// Point value of the remaining piles: 2 per red, 3 per blue.
    ///
    /// Widened to `u64`; any pair of `u32` piles fits.
    #[must_use]
    pub fn score(&self) -> u64 {
        u64::from(self.red) * 2 + u64::from(self.blue) * 3
    }

    /// The game is over once either pile is empty.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.red == 0 || self.blue == 0
    }

    /// Legal moves in priority order. Empty exactly when terminal.
    #[must_use]
    pub fn available_moves(&self) -> MoveList {
        if self.is_terminal() {
            return MoveList::new();
        }
        Move::ALL
            .into_iter()
            .filter(|m| m.fits(self.red, self.blue))
            .collect()
    }

    /// Whether `mv` is currently legal.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        !self.is_terminal() && mv.fits(self.red, self.blue)
    }

    /// Remove the move's marbles from the piles.
    ///
    /// `mv` must be one of [`available_moves`](Self::available_moves); this
    /// is checked in debug builds only.
    pub fn apply_move(&mut self, mv: Move) {
        debug_assert!(self.is_legal(mv), "illegal move {} at ({}, {})", mv, self.red, self.blue);
        let (red, blue) = mv.deltas();
        self.red -= red;
        self.blue -= blue;
    }

    /// Put back the marbles removed by `mv`. Must mirror the last `apply_move`.
    pub fn undo_move(&mut self, mv: Move) {
        let (red, blue) = mv.deltas();
        self.red += red;
        self.blue += blue;
        debug_assert!(
            self.red <= self.initial_red && self.blue <= self.initial_blue,
            "undo of {} overflows initial piles",
            mv
        );
    }

    /// Checked variant of [`apply_move`](Self::apply_move) for move sources
    /// outside the search.
    pub fn try_apply_move(&mut self, mv: Move) -> Result<()> {
        if !self.is_legal(mv) {
            return Err(Error::IllegalMove { mv, red: self.red, blue: self.blue });
        }
        self.apply_move(mv);
        Ok(())
    }

    /// Apply `mv` for the lifetime of the returned guard.
    pub fn scoped(&mut self, mv: Move) -> ScopedMove<'_> {
        ScopedMove::new(self, mv)
    }

    /// Evaluate with `side` as the side that made the position terminal.
    ///
    /// Scores are on the computer's scale. Non-terminal positions are 0.
    /// At a terminal position:
    ///
    /// | variant  | human moved last | computer moved last |
    /// |----------|------------------|---------------------|
    /// | Standard | -1               | +1                  |
    /// | Misere   | +1               | -1                  |
    ///
    /// So in Standard the side that empties a pile wins, and in Misere it
    /// loses. The search passes the mover of the last applied move.
    #[must_use]
    pub fn evaluate_for(&self, side: Side) -> i32 {
        if !self.is_terminal() {
            return NEUTRAL;
        }
        match (self.variant, side) {
            (Variant::Standard, Side::Human) | (Variant::Misere, Side::Computer) => LOSS,
            (Variant::Standard, Side::Computer) | (Variant::Misere, Side::Human) => WIN,
        }
    }

    /// Apply the evaluation table to the state's own `side_to_move`.
    ///
    /// Search and game-loop code track turns themselves and call
    /// [`evaluate_for`](Self::evaluate_for) with the mover instead.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.evaluate_for(self.side_to_move)
    }
}

/// A move applied to a state, undone on drop.
///
/// Derefs to the underlying `GameState`, so nested searches can take
/// `&mut *guard` and scope further moves on top of this one.
pub struct ScopedMove<'a> {
    state: &'a mut GameState,
    mv: Move,
}

impl<'a> ScopedMove<'a> {
    fn new(state: &'a mut GameState, mv: Move) -> Self {
        state.apply_move(mv);
        Self { state, mv }
    }

    /// The move held by this guard.
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Deref for ScopedMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &Self::Target {
        self.state
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.state
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.state.undo_move(self.mv);
    }
}
