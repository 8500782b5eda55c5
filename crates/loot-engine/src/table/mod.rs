//! Loot entries and tables.
//!
//! A table is an ordered list of weighted entries, one per authored line.
//! Order follows the author's text and has no bearing on draw odds.

pub mod parser;

pub use parser::{parse, parse_line, parse_str};

use serde::{Deserialize, Serialize};

/// One parsed line of a loot table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LootEntry {
    /// Relative draw weight. 0 means the entry is never drawn.
    pub weight: u32,
    /// Display text, possibly containing unresolved `{...}` tokens.
    /// Never empty.
    pub template: String,
}

impl LootEntry {
    /// Whether this entry can be drawn.
    pub fn is_drawable(&self) -> bool {
        self.weight > 0
    }
}

impl std::fmt::Display for LootEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.weight, self.template)
    }
}

/// An ordered sequence of loot entries in authoring order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootTable {
    entries: Vec<LootEntry>,
}

impl LootTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in authoring order.
    pub fn entries(&self) -> &[LootEntry] {
        &self.entries
    }

    /// Iterate over entries in authoring order.
    pub fn iter(&self) -> std::slice::Iter<'_, LootEntry> {
        self.entries.iter()
    }

    /// Number of entries, including zero-weight ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries with a positive weight.
    pub fn drawable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_drawable()).count()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.weight)).sum()
    }
}

impl From<Vec<LootEntry>> for LootTable {
    fn from(entries: Vec<LootEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a LootTable {
    type Item = &'a LootEntry;
    type IntoIter = std::slice::Iter<'a, LootEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
