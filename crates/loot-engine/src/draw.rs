//! Draw orchestration: parse, sample, resolve, format.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::{DrawConfig, MAX_COUNT};
use crate::error::{LootError, LootResult};
use crate::expr::resolve;
use crate::sampler::WeightedSampler;
use crate::table::{LootTable, parse};

/// Smallest and largest run identifiers (six digits).
const RUN_ID_RANGE: std::ops::RangeInclusive<u32> = 100_000..=999_999;

/// The formatted outcome of one draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    /// Display-only identifier for telling draws apart.
    pub run_id: u32,
    /// Numbered, fully resolved result lines (`"01: 7 gold"`).
    pub lines: Vec<String>,
}

impl DrawResult {
    /// Header line naming the run.
    pub fn header(&self) -> String {
        format!("Run ID: {}", self.run_id)
    }

    /// Number of result lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if there are no result lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::fmt::Display for DrawResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.header())?;
        writeln!(f)?;
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Parse a user-typed draw count.
///
/// Blank input yields `default`. Anything that is not a whole number from
/// 1 to [`MAX_COUNT`] is rejected with [`LootError::InvalidCount`].
pub fn parse_count(input: &str, default: u32) -> LootResult<u32> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default.clamp(1, MAX_COUNT));
    }
    match input.parse::<u32>() {
        Ok(count) if (1..=MAX_COUNT).contains(&count) => Ok(count),
        _ => Err(LootError::InvalidCount(input.to_string())),
    }
}

/// Parse raw table lines and draw from them.
///
/// The count is validated before the table: bad counts fail with
/// [`LootError::InvalidCount`] even when the table is empty.
pub fn draw<I, S>(
    lines: I,
    count_input: &str,
    config: &DrawConfig,
    rng: &mut StdRng,
) -> LootResult<DrawResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let count = parse_count(count_input, config.default_count)?;
    let table = parse(lines);
    draw_table(&table, count, config, rng)
}

/// Draw `count` results from an already parsed table.
///
/// Each result is picked and then fully resolved before the next pick, so
/// a seeded `rng` reproduces the same run id and lines.
pub fn draw_table(
    table: &LootTable,
    count: u32,
    config: &DrawConfig,
    rng: &mut StdRng,
) -> LootResult<DrawResult> {
    if !(1..=MAX_COUNT).contains(&count) {
        return Err(LootError::InvalidCount(count.to_string()));
    }
    if table.is_empty() {
        return Err(LootError::EmptyTable);
    }
    let sampler = WeightedSampler::new(table)?;

    let run_id = rng.random_range(RUN_ID_RANGE);
    tracing::debug!(run_id, count, entries = table.len(), "drawing loot");

    let width = config.index_width.max(1);
    let lines = (1..=count)
        .map(|i| {
            let entry = sampler.pick(rng);
            let text = resolve(&entry.template, rng);
            format!("{i:0width$}: {text}")
        })
        .collect();

    Ok(DrawResult { run_id, lines })
}
