//! The two sides of a marbles game.
//!
//! The search scores positions from the computer's point of view: the
//! computer is the maximizer, the human the minimizer.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A participant in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    /// True for the side the search maximizes for.
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        matches!(self, Side::Computer)
    }

    /// The side to move at a search node, given the node's maximizing flag.
    #[must_use]
    pub const fn from_maximizing(maximizing: bool) -> Self {
        if maximizing {
            Side::Computer
        } else {
            Side::Human
        }
    }

    /// Lowercase name as accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Human => "human",
            Side::Computer => "computer",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "Human"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Side::Human),
            "computer" => Ok(Side::Computer),
            _ => Err(Error::InvalidSide(s.to_string())),
        }
    }
}
