//! Dynamic quantity expressions embedded in item templates.
//!
//! Two brace-delimited token shapes are recognized:
//!
//! - dice: `{3d6}`, `{2 D 8}` -- the sum of `count` rolls of a `sides`-faced die
//! - range: `{1-10}`, `{10 - 1}` -- one uniform draw, bounds swapped if backwards
//!
//! Any other braced text (`{legendary}`, `{1d}`, `{{2d6}}` outer braces) is
//! left in the output verbatim. Dice tokens are resolved across the whole
//! template first, then range tokens over the result.

pub mod dice;
pub mod range;

pub use dice::{DiceExpr, DiceRoll};
pub use range::RangeExpr;

use std::sync::LazyLock;

use rand::rngs::StdRng;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

static DICE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([0-9]+)\s*[dD]\s*([0-9]+)\}").expect("valid dice regex"));

static RANGE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([0-9]+)\s*-\s*([0-9]+)\}").expect("valid range regex"));

/// A single well-formed token found in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    /// A dice token.
    Dice(DiceExpr),
    /// A range token.
    Range(RangeExpr),
}

impl Expr {
    /// Smallest and largest attainable values.
    pub fn bounds(&self) -> (u64, u64) {
        match self {
            Self::Dice(d) => d.bounds(),
            Self::Range(r) => (u64::from(r.min), u64::from(r.max)),
        }
    }

    /// Roll this expression once.
    pub fn roll(&self, rng: &mut StdRng) -> u64 {
        match self {
            Self::Dice(d) => d.total(rng),
            Self::Range(r) => u64::from(r.roll(rng)),
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dice(d) => write!(f, "{d}"),
            Self::Range(r) => write!(f, "{r}"),
        }
    }
}

/// Numbers too large for `u32` make the token unrecognized.
fn dice_from(caps: &Captures<'_>) -> Option<DiceExpr> {
    let count = caps[1].parse().ok()?;
    let sides = caps[2].parse().ok()?;
    Some(DiceExpr::new(count, sides))
}

fn range_from(caps: &Captures<'_>) -> Option<RangeExpr> {
    let a = caps[1].parse().ok()?;
    let b = caps[2].parse().ok()?;
    Some(RangeExpr::new(a, b))
}

/// Replace every dice token, then every range token, with `value(token)`.
fn substitute(template: &str, mut value: impl FnMut(Expr) -> u64) -> String {
    let diced = DICE_TOKEN.replace_all(template, |caps: &Captures<'_>| match dice_from(caps) {
        Some(dice) => value(Expr::Dice(dice)).to_string(),
        None => caps[0].to_string(),
    });

    let ranged = RANGE_TOKEN.replace_all(&diced, |caps: &Captures<'_>| match range_from(caps) {
        Some(range) => value(Expr::Range(range)).to_string(),
        None => caps[0].to_string(),
    });

    ranged.into_owned()
}

/// Replace every dice and range token in `template` with a rolled value.
///
/// Each token gets its own fresh roll. Randomness is consumed left to
/// right over dice tokens, then left to right over range tokens.
pub fn resolve(template: &str, rng: &mut StdRng) -> String {
    substitute(template, |expr| {
        let value = expr.roll(rng);
        tracing::trace!(token = %expr, value, "rolled token");
        value
    })
}

/// Replace every token with its smallest attainable value.
///
/// Consumes no randomness. Braces still present in the output are the
/// ones [`resolve`] would leave as literal text.
pub fn resolve_lowest(template: &str) -> String {
    substitute(template, |expr| expr.bounds().0)
}

/// List the well-formed tokens in `template`, in order of appearance.
///
/// Consumes no randomness. Ranges produced only by resolving a dice token
/// first are not reported.
pub fn scan(template: &str) -> Vec<Expr> {
    let dice = DICE_TOKEN
        .captures_iter(template)
        .filter_map(|caps| Some((caps.get(0)?.start(), Expr::Dice(dice_from(&caps)?))));
    let ranges = RANGE_TOKEN
        .captures_iter(template)
        .filter_map(|caps| Some((caps.get(0)?.start(), Expr::Range(range_from(&caps)?))));

    let mut found: Vec<(usize, Expr)> = dice.chain(ranges).collect();
    found.sort_by_key(|(start, _)| *start);
    found.into_iter().map(|(_, expr)| expr).collect()
}
