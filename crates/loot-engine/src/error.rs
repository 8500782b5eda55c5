//! Error types for the loot engine.

/// Errors that can occur while drawing from a loot table.
///
/// Every variant is a recoverable validation failure: the table is left
/// untouched and the same input reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LootError {
    /// The requested draw count is not a whole number in `1..=MAX_COUNT`.
    #[error(
        "invalid count '{0}': enter a whole number from 1 to {max}",
        max = crate::config::MAX_COUNT
    )]
    InvalidCount(String),

    /// The table has no entries at all.
    #[error("the loot table is empty: add at least one item")]
    EmptyTable,

    /// The table has entries, but every one of them has weight 0.
    #[error(
        "nothing to draw: all {entries} entries have weight 0, give at least one a positive weight"
    )]
    NoEligibleEntries {
        /// Number of (zero-weight) entries in the table.
        entries: usize,
    },
}

/// The kind of a [`LootError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`LootError::InvalidCount`].
    InvalidCount,
    /// See [`LootError::EmptyTable`].
    EmptyTable,
    /// See [`LootError::NoEligibleEntries`].
    NoEligibleEntries,
}

impl LootError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCount(_) => ErrorKind::InvalidCount,
            Self::EmptyTable => ErrorKind::EmptyTable,
            Self::NoEligibleEntries { .. } => ErrorKind::NoEligibleEntries,
        }
    }
}

/// Convenience result type for loot operations.
pub type LootResult<T> = Result<T, LootError>;
