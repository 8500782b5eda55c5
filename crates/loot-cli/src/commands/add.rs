use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use loot_engine::table::parse_line;

pub fn run(file: &Path, item: &str, weight: Option<u32>) -> Result<(), String> {
    let item = item.trim();
    if item.contains('\n') || item.contains('\r') {
        return Err("item must fit on a single line".into());
    }

    let line = match weight {
        Some(w) => format!("{w}: {item}"),
        None => item.to_string(),
    };
    let entry = parse_line(&line).ok_or_else(|| "item text is empty".to_string())?;

    // Keep the new entry on its own line if the file lacks a trailing newline.
    let existing = match std::fs::read_to_string(file) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(format!("cannot read {}: {e}", file.display())),
    };
    let separator = if existing.is_empty() || existing.ends_with('\n') {
        ""
    } else {
        "\n"
    };

    let mut out = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)
        .map_err(|e| format!("cannot open {}: {e}", file.display()))?;
    writeln!(out, "{separator}{line}")
        .map_err(|e| format!("cannot write {}: {e}", file.display()))?;

    let table = super::load_table(file)?;
    println!(
        "Added '{}' (weight {}) to {}",
        entry.template,
        entry.weight,
        file.display()
    );
    println!(
        "  {} in table",
        super::plural(table.len(), "entry", "entries")
    );

    Ok(())
}
