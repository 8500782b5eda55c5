pub mod add;
pub mod check;
pub mod draw;
pub mod init;
pub mod list;
pub mod roll;

use std::io::ErrorKind;
use std::path::Path;

use loot_engine::{DrawConfig, LootTable};

/// Read the raw table text.
fn read_table_text(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => format!(
            "table file '{}' not found (create one with `loot init`)",
            path.display()
        ),
        _ => format!("cannot read {}: {e}", path.display()),
    })
}

/// Read and parse a table file.
fn load_table(path: &Path) -> Result<LootTable, String> {
    read_table_text(path).map(|text| loot_engine::parse_str(&text))
}

/// Draw configuration for an optional seed.
fn config_for(seed: Option<u64>) -> DrawConfig {
    match seed {
        Some(seed) => DrawConfig::default().with_seed(seed),
        None => DrawConfig::default(),
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}
