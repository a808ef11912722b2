//! Transposition table: exact minimax values keyed by position.
//!
//! Only exact values go in. A searcher owns its table and is the only
//! writer; a table can be handed to another thread once filled since it is
//! plain owned data.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Cache of exact position values.
#[derive(Clone, Debug)]
pub struct TranspositionTable<S> {
    entries: FxHashMap<S, i8>,
}

impl<S: Eq + Hash> TranspositionTable<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// The stored value of `state`, if any.
    #[must_use]
    pub fn get(&self, state: &S) -> Option<i8> {
        self.entries.get(state).copied()
    }

    /// Store the exact value of `state`.
    pub fn insert(&mut self, state: S, value: i8) {
        self.entries.insert(state, value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<S: Eq + Hash> Default for TranspositionTable<S> {
    fn default() -> Self {
        Self::new()
    }
}
