use std::path::Path;

use colored::Colorize;

pub fn run(file: &Path, count: &str, seed: Option<u64>, json: bool) -> Result<(), String> {
    let text = super::read_table_text(file)?;
    let config = super::config_for(seed);
    let mut rng = config.rng();

    let result = loot_engine::draw(text.lines(), count, &config, &mut rng)
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!("  {}", result.header().bold());
    println!();
    for line in &result.lines {
        println!("  {line}");
    }

    Ok(())
}
