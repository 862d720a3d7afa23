//! Game configuration types.
//!
//! Everything a game needs is captured once, up front, in a `GameConfig`:
//! - pile sizes
//! - rule variant (`Variant`)
//! - who moves first
//! - how deep the computer searches (`Depth`)
//!
//! The configuration is passed explicitly to whatever needs it; there is no
//! process-wide state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::side::Side;
use super::state::GameState;
use crate::error::Error;
use crate::search::SearchConfig;

/// Rule variant deciding who wins at a terminal position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Standard,
    Misere,
}

impl Variant {
    /// Lowercase name as accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::Misere => "misere",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Variant::Standard),
            "misere" | "misère" => Ok(Variant::Misere),
            _ => Err(Error::InvalidVariant(s.to_string())),
        }
    }
}

/// Search depth limit, in plies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Depth {
    /// Search at most this many plies; non-terminal leaves score 0.
    Plies(u32),
    /// Search every line to a terminal position.
    #[default]
    Unbounded,
}

impl Depth {
    /// Build a finite depth, clamping zero and negative values to `Plies(0)`.
    ///
    /// ```
    /// use marbles::core::Depth;
    ///
    /// assert_eq!(Depth::from_plies(3), Depth::Plies(3));
    /// assert_eq!(Depth::from_plies(-2), Depth::Plies(0));
    /// ```
    #[must_use]
    pub fn from_plies(plies: i64) -> Self {
        Depth::Plies(u32::try_from(plies.max(0)).unwrap_or(u32::MAX))
    }

    /// True when no further plies may be searched.
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Depth::Plies(0))
    }

    /// Depth available one ply further down. Never goes below `Plies(0)`.
    #[must_use]
    pub const fn child(self) -> Self {
        match self {
            Depth::Plies(n) => Depth::Plies(n.saturating_sub(1)),
            Depth::Unbounded => Depth::Unbounded,
        }
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Depth::Plies(n) => write!(f, "{} plies", n),
            Depth::Unbounded => write!(f, "unbounded"),
        }
    }
}

impl FromStr for Depth {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("unbounded") {
            return Ok(Depth::Unbounded);
        }
        trimmed
            .parse::<i64>()
            .map(Depth::from_plies)
            .map_err(|_| Error::InvalidDepth(s.to_string()))
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Red marbles at the start.
    pub red: u32,

    /// Blue marbles at the start.
    pub blue: u32,

    /// Win condition at terminal positions.
    pub variant: Variant,

    /// Side that makes the first move.
    pub first_player: Side,

    /// Computer search depth.
    pub depth: Depth,
}

impl GameConfig {
    /// Standard game, computer first, unbounded search.
    pub fn new(red: u32, blue: u32) -> Self {
        Self {
            red,
            blue,
            variant: Variant::Standard,
            first_player: Side::Computer,
            depth: Depth::Unbounded,
        }
    }

    /// Set the rule variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the first player.
    #[must_use]
    pub fn with_first_player(mut self, side: Side) -> Self {
        self.first_player = side;
        self
    }

    /// Set the search depth.
    #[must_use]
    pub fn with_depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    /// Fresh game state for this configuration.
    #[must_use]
    pub fn new_state(&self) -> GameState {
        GameState::new(self.red, self.blue, self.variant, self.first_player)
    }

    /// Search configuration for the computer player.
    #[must_use]
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::default().with_depth(self.depth)
    }
}
