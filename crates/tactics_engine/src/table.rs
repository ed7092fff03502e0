//! Per-search position value cache.

use std::collections::HashMap;

/// Maps canonical position keys to the value last computed for them.
///
/// One table lives for exactly one top-level search: the driver clears
/// it before searching, and only the single search thread touches it.
#[derive(Debug, Default)]
pub struct PositionTable {
    entries: HashMap<u64, i32>,
}

impl PositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: u64) -> Option<i32> {
        self.entries.get(&key).copied()
    }

    pub fn insert(&mut self, key: u64, value: i32) {
        self.entries.insert(key, value);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
