//! End-of-game scoring.
//!
//! Scoring is separate from the search evaluation: the human is credited
//! with the point value of every marble taken from the piles, the computer
//! with the point value of what is left (2 per red, 3 per blue).

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Side};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// Single winner.
    Side(Side),
    /// Equal scores.
    Tie,
}

impl Winner {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, Winner::Side(s) if *s == side)
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Side(side) => write!(f, "Winner: {}", side),
            Winner::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Final points for both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub human: u64,
    pub computer: u64,
}

impl FinalScore {
    /// Higher score wins; equal scores tie.
    #[must_use]
    pub fn winner(&self) -> Winner {
        match self.human.cmp(&self.computer) {
            std::cmp::Ordering::Greater => Winner::Side(Side::Human),
            std::cmp::Ordering::Less => Winner::Side(Side::Computer),
            std::cmp::Ordering::Equal => Winner::Tie,
        }
    }
}

impl GameState {
    /// Score the game from its current piles.
    ///
    /// Meaningful once [`is_terminal`](GameState::is_terminal) holds, but
    /// defined for any state.
    #[must_use]
    pub fn final_score(&self) -> FinalScore {
        let taken_red = u64::from(self.initial_red() - self.red());
        let taken_blue = u64::from(self.initial_blue() - self.blue());
        FinalScore {
            human: taken_red * 2 + taken_blue * 3,
            computer: self.score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Move, Variant};

    #[test]
    fn test_final_score() {
        let mut state = GameState::new(5, 7, Variant::Standard, Side::Human);
        state.apply_move(Move::TakeRed2);
        state.apply_move(Move::TakeBlue2);
        state.apply_move(Move::TakeRed2);
        state.apply_move(Move::TakeRed1);
        assert!(state.is_terminal());

        let score = state.final_score();
        assert_eq!(score.human, 5 * 2 + 2 * 3);
        assert_eq!(score.computer, 5 * 3);
        assert_eq!(score.winner(), Winner::Side(Side::Human));
    }

    #[test]
    fn test_fresh_game_scores() {
        let state = GameState::new(3, 2, Variant::Standard, Side::Computer);
        let score = state.final_score();
        assert_eq!(score.human, 0);
        assert_eq!(score.computer, state.score());
    }

    #[test]
    fn test_large_piles_score_without_overflow() {
        let mut state = GameState::new(u32::MAX, 3_000_000_000, Variant::Standard, Side::Human);
        state.apply_move(Move::TakeBlue2);
        let score = state.final_score();
        assert_eq!(score.human, 6);
        assert_eq!(score.computer, u64::from(u32::MAX) * 2 + 2_999_999_998 * 3);
        assert_eq!(score.human + score.computer, u64::from(state.initial_red()) * 2 + 9_000_000_000);
    }

    #[test]
    fn test_winner() {
        assert_eq!(FinalScore { human: 9, computer: 4 }.winner(), Winner::Side(Side::Human));
        assert_eq!(FinalScore { human: 6, computer: 6 }.winner(), Winner::Tie);

        let computer = FinalScore { human: 1, computer: 8 }.winner();
        assert!(computer.is_winner(Side::Computer));
        assert!(!computer.is_winner(Side::Human));
        assert!(!Winner::Tie.is_winner(Side::Human));
    }

    #[test]
    fn test_winner_display() {
        assert_eq!(Winner::Side(Side::Human).to_string(), "Winner: Human");
        assert_eq!(Winner::Tie.to_string(), "It's a tie!");
    }
}
