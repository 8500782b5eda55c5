use std::fs;
use std::path::Path;

const STARTER_TABLE: &str = "\
50: {2d6} copper coins
25: {1-10} silver coins
10: Potion of healing
5: Shortsword
1: Ring of {legendary} power
0: Broken helm
";

pub fn run(file: &Path) -> Result<(), String> {
    if file.exists() {
        return Err(format!("'{}' already exists", file.display()));
    }

    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| format!("cannot create directory: {e}"))?;
    }

    fs::write(file, STARTER_TABLE)
        .map_err(|e| format!("cannot write {}: {e}", file.display()))?;

    let table = loot_engine::parse_str(STARTER_TABLE);
    println!(
        "Created loot table '{}' with {}",
        file.display(),
        super::plural(table.len(), "entry", "entries")
    );
    println!();
    println!("One item per line: `WEIGHT: ITEM`, or a bare `ITEM` with weight 1.");
    println!("{{XdY}} rolls dice and {{MIN-MAX}} picks a number when the item is drawn.");
    println!();
    println!("Get started:");
    println!("  loot list              # Show entries and draw chances");
    println!("  loot add \"Rope\" -w 3   # Append an item");
    println!("  loot draw -n 5         # Draw five results");

    Ok(())
}
