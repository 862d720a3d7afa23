//! Move representation.
//!
//! The game has exactly four moves: take two or one marbles from either
//! pile. `Move::ALL` lists them in the fixed priority order used for move
//! enumeration, which is also the search's tie-break order.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::Error;

/// Moves available in a position. Never more than four.
pub type MoveList = SmallVec<[Move; 4]>;

/// One of the four fixed marble-removal actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Remove two red marbles. Requires `red >= 2`.
    TakeRed2,
    /// Remove two blue marbles. Requires `blue >= 2`.
    TakeBlue2,
    /// Remove one red marble. Requires `red >= 1`.
    TakeRed1,
    /// Remove one blue marble. Requires `blue >= 1`.
    TakeBlue1,
}

impl Move {
    /// All moves in enumeration priority order.
    pub const ALL: [Move; 4] = [Move::TakeRed2, Move::TakeBlue2, Move::TakeRed1, Move::TakeBlue1];

    /// Marbles removed as `(red, blue)`.
    #[must_use]
    pub const fn deltas(self) -> (u32, u32) {
        match self {
            Move::TakeRed2 => (2, 0),
            Move::TakeBlue2 => (0, 2),
            Move::TakeRed1 => (1, 0),
            Move::TakeBlue1 => (0, 1),
        }
    }

    /// Total marbles removed.
    #[must_use]
    pub const fn size(self) -> u32 {
        let (red, blue) = self.deltas();
        red + blue
    }

    /// Look up the move removing exactly `(red, blue)` marbles.
    #[must_use]
    pub fn from_deltas(red: u32, blue: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.deltas() == (red, blue))
    }

    /// Whether the move can be played on piles of the given size.
    #[must_use]
    pub const fn fits(self, red: u32, blue: u32) -> bool {
        let (dr, db) = self.deltas();
        red >= dr && blue >= db
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (red, blue) = self.deltas();
        write!(f, "({}, {})", red, blue)
    }
}

/// Parses the `"<red> <blue>"` shape typed by a human player.
///
/// Shape errors are `Error::InvalidMoveInput`, well-formed pairs that name
/// no move are `Error::UnknownMove`. Legality in a position is checked
/// separately.
impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMoveInput(s.trim().to_string());

        let parts: Vec<&str> = s.split_whitespace().collect();
        let [red, blue] = parts.as_slice() else {
            return Err(invalid());
        };
        let red: u32 = red.parse().map_err(|_| invalid())?;
        let blue: u32 = blue.parse().map_err(|_| invalid())?;

        Move::from_deltas(red, blue).ok_or(Error::UnknownMove { red, blue })
    }
}
