// src/item.rs
//! Candidate items and the pool they are sampled from.
//!
//! The pool file lists items as alternating lines: a name, then its icon.

use crate::error::{Result, TwoChoiceError};
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of items drawn into a round.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// An immutable candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Opaque display token (an emoji, an HTML snippet, a glyph name...).
    pub icon: String,
}

impl Item {
    #[must_use]
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// Parses pool text into items.
///
/// # Errors
/// Returns `EmptyPool` if no item is found, or `MalformedPool` when a name line is blank.
pub fn parse_pool(content: &str) -> Result<Vec<Item>> {
    let lines: Vec<&str> = content
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .collect();
    let used = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(0, |last| last + 1);

    let mut items = Vec::with_capacity(used / 2 + 1);
    for (pair_idx, chunk) in lines[..used].chunks(2).enumerate() {
        let name = chunk.first().map_or("", |n| n.trim());
        if name.is_empty() {
            return Err(TwoChoiceError::MalformedPool {
                line: pair_idx * 2 + 1,
                reason: "item name is blank".to_string(),
            });
        }
        let icon = chunk.get(1).map_or("", |i| i.trim());
        items.push(Item::new(name, icon));
    }

    if items.is_empty() {
        return Err(TwoChoiceError::EmptyPool);
    }
    Ok(items)
}

/// Loads and parses a pool file.
///
/// # Errors
/// Returns error if the file cannot be read or parsed.
pub fn load_pool(path: &Path) -> Result<Vec<Item>> {
    let content = fs::read_to_string(path).map_err(|e| TwoChoiceError::io_at(e, path))?;
    parse_pool(&content)
}

/// Draws up to `count` distinct items uniformly at random.
///
/// The result holds `min(count, pool.len())` items in random order.
pub fn sample<R: Rng + ?Sized>(pool: &[Item], count: usize, rng: &mut R) -> Vec<Item> {
    let amount = count.min(pool.len());
    index::sample(rng, pool.len(), amount)
        .into_iter()
        .filter_map(|i| pool.get(i).cloned())
        .collect()
}
