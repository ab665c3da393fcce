// src/cli/handlers.rs
use crate::cli::args::PlayArgs;
use crate::cli::session;
use crate::config::Config;
use crate::error::TwoChoiceError;
use crate::events::EventLogger;
use crate::exit::TwoChoiceExit;
use crate::game::GameLoop;
use crate::graph::{ambiguous_pairs, PreferenceGraph, TopologicalOrder};
use crate::item::{self, Item};
use crate::reporting;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

fn load_config() -> Config {
    let config = Config::load();
    if !config.preferences.color {
        colored::control::set_override(false);
    }
    config
}

fn resolve_pool(config: &Config, items: Option<&Path>) -> Result<Vec<Item>> {
    let path: PathBuf = items.map_or_else(|| config.items_path(), Path::to_path_buf);
    item::load_pool(&path).with_context(|| format!("loading item pool {}", path.display()))
}

/// Handles the play command.
///
/// # Errors
/// Returns error if the pool cannot be loaded or the terminal fails.
pub fn handle_play(args: &PlayArgs) -> Result<TwoChoiceExit> {
    let config = load_config();
    let pool = resolve_pool(&config, args.items.as_deref())?;
    let count = args.count.unwrap_or_else(|| config.sample_size());
    let seed = args.seed.or(config.game.seed);

    let mut game = GameLoop::new(pool, count, seed)?;
    if let Some(path) = config.event_log_path() {
        game.add_observer(Box::new(EventLogger::at(path)));
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    session::run(&mut game, &mut input, &mut out)
}

/// Splits `"A>B"` (A preferred) or `"A<B"` (B preferred) into `(preferred, other)`.
///
/// # Errors
/// Returns `MalformedPreference` unless there is exactly one `>` or `<` with names on both sides.
pub fn parse_preference(pref: &str) -> crate::error::Result<(String, String)> {
    let malformed = || TwoChoiceError::MalformedPreference(pref.to_string());
    let ops = pref.matches(['>', '<']).count();
    if ops != 1 {
        return Err(malformed());
    }
    let (pos, op) = pref
        .char_indices()
        .find(|(_, c)| *c == '>' || *c == '<')
        .ok_or_else(malformed)?;
    let left = pref[..pos].trim();
    let right = pref[pos + op.len_utf8()..].trim();
    if left.is_empty() || right.is_empty() {
        return Err(malformed());
    }
    Ok(if op == '>' {
        (left.to_string(), right.to_string())
    } else {
        (right.to_string(), left.to_string())
    })
}

/// Builds a graph over the whole pool from textual preferences.
///
/// # Errors
/// Returns error on a malformed preference or an unknown item name.
pub fn build_graph(pool: Vec<Item>, prefer: &[String]) -> crate::error::Result<PreferenceGraph> {
    let mut graph = PreferenceGraph::new(pool);
    for pref in prefer {
        let (preferred, other) = parse_preference(pref)?;
        let from = graph
            .find(&preferred)
            .ok_or_else(|| TwoChoiceError::UnknownItem(preferred.clone()))?;
        let to = graph
            .find(&other)
            .ok_or_else(|| TwoChoiceError::UnknownItem(other.clone()))?;
        graph.add_edge(from, to);
    }
    Ok(graph)
}

#[derive(Debug, Serialize)]
struct OrderJson {
    valid: bool,
    order: Vec<String>,
    ambiguous: Vec<(String, String)>,
    cycle: Vec<String>,
}

/// Handles the order command.
///
/// # Errors
/// Returns error if the pool cannot be loaded or output fails.
pub fn handle_order(items: Option<&Path>, prefer: &[String], json: bool) -> Result<TwoChoiceExit> {
    let config = load_config();
    let pool = resolve_pool(&config, items)?;

    let graph = match build_graph(pool, prefer) {
        Ok(graph) => graph,
        Err(e @ (TwoChoiceError::UnknownItem(_) | TwoChoiceError::MalformedPreference(_))) => {
            eprintln!("{} {e}", "error:".red().bold());
            return Ok(TwoChoiceExit::InvalidInput);
        }
        Err(e) => return Err(e.into()),
    };

    let topo = TopologicalOrder::compute(&graph);
    let pairs = ambiguous_pairs(&topo, &graph);
    let cycle = match topo.ensure_valid(&graph) {
        Err(TwoChoiceError::CyclicGraph { cycle }) => cycle,
        _ => Vec::new(),
    };

    let mut out = io::stdout().lock();
    if json {
        let name = |id| graph.item(id).map_or_else(String::new, |i| i.name.clone());
        let report = OrderJson {
            valid: topo.is_valid(),
            order: if topo.is_valid() {
                topo.items(&graph).into_iter().map(|i| i.name.clone()).collect()
            } else {
                Vec::new()
            },
            ambiguous: pairs.iter().map(|&(a, b)| (name(a), name(b))).collect(),
            cycle: cycle.clone(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else if topo.is_valid() {
        reporting::write_order_report(&mut out, &topo, &graph, &pairs)?;
    } else {
        reporting::write_abort(&mut out, &cycle)?;
    }

    Ok(if topo.is_valid() {
        TwoChoiceExit::Success
    } else {
        TwoChoiceExit::CyclicPreferences
    })
}

/// Handles the pool command.
///
/// # Errors
/// Returns error if the pool cannot be loaded.
pub fn handle_pool(items: Option<&Path>) -> Result<TwoChoiceExit> {
    let config = load_config();
    let pool = resolve_pool(&config, items)?;
    reporting::write_pool(&mut io::stdout().lock(), &pool)?;
    Ok(TwoChoiceExit::Success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_direction() {
        assert_eq!(
            parse_preference("Cat > Dog").unwrap(),
            ("Cat".to_string(), "Dog".to_string())
        );
        assert_eq!(
            parse_preference("Cat<Dog").unwrap(),
            ("Dog".to_string(), "Cat".to_string())
        );
    }

    #[test]
    fn malformed_preferences() {
        for bad in ["Cat", "Cat>", ">Dog", "A>B>C", "A<B>C"] {
            assert!(
                matches!(parse_preference(bad), Err(TwoChoiceError::MalformedPreference(_))),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn unknown_item_is_reported() {
        let pool = vec![Item::new("Cat", ""), Item::new("Dog", "")];
        let err = build_graph(pool, &["Cat>Fish".to_string()]).unwrap_err();
        assert!(matches!(err, TwoChoiceError::UnknownItem(name) if name == "Fish"));
    }
}
