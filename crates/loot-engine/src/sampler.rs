//! Weighted sampling with replacement.
//!
//! Each draw picks entry `i` with probability `weight_i / total_weight`.
//! Zero-weight entries are never picked.

use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;

use crate::config::MAX_COUNT;
use crate::error::{LootError, LootResult};
use crate::table::{LootEntry, LootTable};

/// A sampler over a borrowed table snapshot.
#[derive(Debug, Clone)]
pub struct WeightedSampler<'a> {
    table: &'a LootTable,
    index: WeightedIndex<u64>,
    total: u64,
}

impl<'a> WeightedSampler<'a> {
    /// Build a sampler for `table`.
    ///
    /// Fails with [`LootError::NoEligibleEntries`] if no entry has a
    /// positive weight (including when the table is empty).
    pub fn new(table: &'a LootTable) -> LootResult<Self> {
        let no_eligible = || LootError::NoEligibleEntries {
            entries: table.len(),
        };

        let total = table.total_weight();
        if total == 0 {
            return Err(no_eligible());
        }

        let index = WeightedIndex::new(table.iter().map(|e| u64::from(e.weight)))
            .map_err(|_| no_eligible())?;

        tracing::debug!(
            entries = table.len(),
            drawable = table.drawable_count(),
            total_weight = total,
            "built weighted sampler"
        );

        Ok(Self {
            table,
            index,
            total,
        })
    }

    /// Draw one entry.
    pub fn pick(&self, rng: &mut StdRng) -> &'a LootEntry {
        &self.table.entries()[self.index.sample(rng)]
    }

    /// Per-draw probability of the entry at `index` (0.0 if out of range).
    pub fn chance(&self, index: usize) -> f64 {
        self.table
            .entries()
            .get(index)
            .map_or(0.0, |e| e.weight as f64 / self.total as f64)
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u64 {
        self.total
    }
}

/// Draw `count` templates from `table` with replacement.
///
/// Fails with [`LootError::InvalidCount`] if `count` is outside
/// `1..=MAX_COUNT` and with
/// [`LootError::NoEligibleEntries`] if nothing can be drawn.
pub fn sample<'a>(table: &'a LootTable, count: u32, rng: &mut StdRng) -> LootResult<Vec<&'a str>> {
    if !(1..=MAX_COUNT).contains(&count) {
        return Err(LootError::InvalidCount(count.to_string()));
    }
    let sampler = WeightedSampler::new(table)?;
    Ok((0..count)
        .map(|_| sampler.pick(rng).template.as_str())
        .collect())
}
