//! Weighted loot table engine.
//!
//! Parses authored loot tables (`WEIGHT:ITEM` or bare `ITEM` lines),
//! draws entries with replacement in proportion to their weight, and
//! resolves embedded dice (`{3d6}`) and range (`{1-10}`) tokens into
//! rolled literals.

pub mod config;
pub mod draw;
pub mod error;
pub mod expr;
pub mod sampler;
pub mod table;

pub use config::{DrawConfig, MAX_COUNT};
pub use draw::{DrawResult, draw, draw_table, parse_count};
pub use error::{ErrorKind, LootError, LootResult};
pub use expr::{DiceExpr, Expr, RangeExpr, resolve, resolve_lowest, scan};
pub use sampler::{WeightedSampler, sample};
pub use table::{LootEntry, LootTable, parse, parse_str};
