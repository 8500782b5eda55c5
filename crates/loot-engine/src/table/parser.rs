//! Entry parser: raw authored lines into weighted entries.
//!
//! A line is either `WEIGHT:ITEM` or a bare `ITEM` (weight 1). Anything
//! that does not fit the weighted shape is taken whole as the item, so
//! unstructured lists parse without errors.

use std::sync::LazyLock;

use regex::Regex;

use super::{LootEntry, LootTable};

static WEIGHTED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9]+)\s*:\s*(.*)$").expect("valid weighted-line regex"));

/// Parse one line into an entry.
///
/// Returns `None` for blank lines and for lines whose item text is empty
/// after trimming (e.g. `"5:"`). A weight too large for `u32` does not
/// match the weighted shape, so the whole line becomes the item.
pub fn parse_line(line: &str) -> Option<LootEntry> {
    if line.trim().is_empty() {
        return None;
    }

    let weighted = WEIGHTED_LINE.captures(line).and_then(|caps| {
        let weight = caps[1].parse::<u32>().ok()?;
        Some((weight, caps[2].trim().to_string()))
    });

    let (weight, template) = weighted.unwrap_or_else(|| (1, line.trim().to_string()));

    if template.is_empty() {
        None
    } else {
        Some(LootEntry { weight, template })
    }
}

/// Parse a sequence of raw lines into a table, keeping their order.
pub fn parse<I, S>(lines: I) -> LootTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let entries: Vec<LootEntry> = lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect();
    let table = LootTable::from(entries);

    tracing::debug!(
        entries = table.len(),
        drawable = table.drawable_count(),
        total_weight = table.total_weight(),
        "parsed loot table"
    );

    table
}

/// Parse a newline-delimited text blob into a table.
pub fn parse_str(text: &str) -> LootTable {
    parse(text.lines())
}
