use colored::Colorize;
use loot_engine::{resolve, scan};

pub fn run(template: &str, seed: Option<u64>) -> Result<(), String> {
    let tokens = scan(template);
    let mut rng = super::config_for(seed).rng();
    let resolved = resolve(template, &mut rng);

    println!("  {resolved}");

    if !tokens.is_empty() {
        let listed: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        println!("  {}", format!("tokens: {}", listed.join(", ")).dimmed());
    }

    Ok(())
}
