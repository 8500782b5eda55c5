use std::path::Path;

use colored::Colorize;
use loot_engine::{LootError, WeightedSampler, resolve_lowest};

pub fn run(file: &Path) -> Result<(), String> {
    let table = super::load_table(file)?;

    println!(
        "  {} {}",
        "Checked".bold(),
        super::plural(table.len(), "entry", "entries")
    );

    if table.is_empty() {
        return Err(LootError::EmptyTable.to_string());
    }

    let zero = table.len() - table.drawable_count();
    if zero > 0 {
        println!(
            "  {}",
            format!(
                "{} with weight 0 (never drawn)",
                super::plural(zero, "entry", "entries")
            )
            .yellow()
        );
    }

    for (i, entry) in table.iter().enumerate() {
        if resolve_lowest(&entry.template).contains('{') {
            println!(
                "  {} entry {} '{}' has braces that are not dice or range tokens (kept as text)",
                "note:".dimmed(),
                i + 1,
                entry.template
            );
        }
    }

    WeightedSampler::new(&table).map_err(|e| e.to_string())?;

    println!("  {}", "All checks passed".green());
    Ok(())
}
