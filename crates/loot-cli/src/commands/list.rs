use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use loot_engine::{WeightedSampler, scan};

pub fn run(file: &Path) -> Result<(), String> {
    let table = super::load_table(file)?;

    if table.is_empty() {
        println!("  No entries found.");
        return Ok(());
    }

    let sampler = WeightedSampler::new(&table).ok();

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["#", "Weight", "Chance", "Item", "Tokens"]);

    for (i, entry) in table.iter().enumerate() {
        let chance = match &sampler {
            Some(s) if entry.is_drawable() => format!("{:.1}%", s.chance(i) * 100.0),
            _ => "—".to_string(),
        };

        let tokens: Vec<String> = scan(&entry.template)
            .iter()
            .map(|expr| {
                let (lo, hi) = expr.bounds();
                format!("{expr} ({lo}-{hi})")
            })
            .collect();
        let tokens = if tokens.is_empty() {
            "—".to_string()
        } else {
            tokens.join(", ")
        };

        out.add_row(vec![
            (i + 1).to_string(),
            entry.weight.to_string(),
            chance,
            entry.template.clone(),
            tokens,
        ]);
    }

    println!("{out}");
    println!();
    println!(
        "  {}, {} drawable, total weight {}",
        super::plural(table.len(), "entry", "entries"),
        table.drawable_count(),
        table.total_weight()
    );

    Ok(())
}
