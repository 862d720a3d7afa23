//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::Depth;

/// Search configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched below the position being decided.
    /// `Depth::Unbounded` searches every line to the end of the game.
    pub depth: Depth,

    /// Alpha-beta pruning (default: on).
    /// Turning it off gives plain minimax: same values, more nodes.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: Depth::Unbounded,
            pruning: true,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with pruning switched on or off.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, Depth::Unbounded);
        assert!(config.pruning);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_depth(Depth::Plies(4))
            .with_pruning(false);

        assert_eq!(config.depth, Depth::Plies(4));
        assert!(!config.pruning);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_depth(Depth::Plies(7));
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
