//! Minimax configuration parameters.

use serde::{Deserialize, Serialize};

/// Search configuration.
///
/// Both switches are pure optimizations: turning them on never changes the
/// chosen move or any reported value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Alpha-beta pruning (fail-soft).
    /// Skips subtrees that cannot affect the result.
    pub pruning: bool,

    /// Cache exact values by position in a transposition table.
    /// The table lives as long as the searcher and is reused across calls.
    pub memoize: bool,
}

impl SearchConfig {
    /// Plain exhaustive minimax, no optimizations.
    pub fn exhaustive() -> Self {
        Self::default()
    }

    /// Pruning and memoization both enabled.
    pub fn fast() -> Self {
        Self {
            pruning: true,
            memoize: true,
        }
    }

    /// Enable or disable alpha-beta pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Enable or disable the transposition table.
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert!(!config.pruning);
        assert!(!config.memoize);
        assert_eq!(config, SearchConfig::exhaustive());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default().with_pruning(true);
        assert!(config.pruning);
        assert!(!config.memoize);

        let config = config.with_memoize(true);
        assert_eq!(config, SearchConfig::fast());
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::fast();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
