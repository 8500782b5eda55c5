//! CLI frontend for the loot drop generator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Table file used when `--file` is not given.
const DEFAULT_TABLE: &str = "loot_table.txt";

#[derive(Parser)]
#[command(
    name = "loot",
    about = "Loot drop generator: weighted tables with dice and range quantities",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter loot table file
    Init {
        /// Table file to create
        #[arg(short, long, default_value = DEFAULT_TABLE)]
        file: PathBuf,
    },

    /// Append an item to the loot table
    Add {
        /// Item text; may contain {XdY} or {MIN-MAX} tokens
        item: String,

        /// Draw weight (omit for the default weight of 1)
        #[arg(short, long)]
        weight: Option<u32>,

        /// Table file
        #[arg(short, long, default_value = DEFAULT_TABLE)]
        file: PathBuf,
    },

    /// Show the parsed table with weights and draw chances
    List {
        /// Table file
        #[arg(short, long, default_value = DEFAULT_TABLE)]
        file: PathBuf,
    },

    /// Check that the table can be drawn from
    Check {
        /// Table file
        #[arg(short, long, default_value = DEFAULT_TABLE)]
        file: PathBuf,
    },

    /// Draw loot from the table
    Draw {
        /// Number of results (blank means 1)
        #[arg(short = 'n', long, default_value = "", allow_hyphen_values = true)]
        count: String,

        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Table file
        #[arg(short, long, default_value = DEFAULT_TABLE)]
        file: PathBuf,
    },

    /// Resolve the dice and range tokens of a single item
    Roll {
        /// Item text, e.g. "{3d6} gold"
        template: String,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Init { file } => commands::init::run(&file),
        Commands::Add { item, weight, file } => commands::add::run(&file, &item, weight),
        Commands::List { file } => commands::list::run(&file),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Draw {
            count,
            seed,
            json,
            file,
        } => commands::draw::run(&file, &count, seed, json),
        Commands::Roll { template, seed } => commands::roll::run(&template, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
