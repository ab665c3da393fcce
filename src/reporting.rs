//! Console output for rounds and orderings.
//!
//! Results show the winner on its own line, then the rest of the ranking in
//! rows of three joined by `›`.

use crate::graph::{Pair, PreferenceGraph, TopologicalOrder};
use crate::item::Item;
use colored::Colorize;
use std::io::{self, Write};

/// Items per row below the winner.
const ROW_WIDTH: usize = 3;

fn label(item: &Item) -> String {
    if item.icon.is_empty() {
        item.name.clone()
    } else {
        format!("{} {}", item.icon, item.name)
    }
}

/// Writes the pair awaiting a comparison.
///
/// # Errors
/// Returns error if writing fails.
pub fn write_pair(out: &mut impl Write, step: usize, left: &Item, right: &Item) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("Round {step}").dimmed())?;
    writeln!(
        out,
        "  {} {}   {}   {} {}",
        "[1]".cyan().bold(),
        label(left).bold(),
        "or".dimmed(),
        "[2]".cyan().bold(),
        label(right).bold()
    )?;
    write!(out, "{} ", "Which do you prefer? (1/2, q to quit)".dimmed())?;
    out.flush()
}

/// Writes a settled ranking, most preferred first.
///
/// # Errors
/// Returns error if writing fails.
pub fn write_result(out: &mut impl Write, order: &[&Item], comparisons: usize) -> io::Result<()> {
    let Some((first, rest)) = order.split_first() else {
        return writeln!(out, "{}", "Nothing to rank.".yellow());
    };

    writeln!(out)?;
    writeln!(
        out,
        "{} {}",
        "Your choice:".green().bold(),
        label(first).bold()
    )?;

    let separator = format!(" {} ", "›".dimmed());
    for row in rest.chunks(ROW_WIDTH) {
        let cells: Vec<String> = row.iter().map(|item| label(item)).collect();
        writeln!(out, "  {}", cells.join(separator.as_str()))?;
    }

    writeln!(
        out,
        "{}",
        format!("Settled after {comparisons} comparison(s).").dimmed()
    )
}

/// Writes the cycle that stopped a round.
///
/// # Errors
/// Returns error if writing fails.
pub fn write_abort(out: &mut impl Write, cycle: &[String]) -> io::Result<()> {
    writeln!(out, "{}", "Preferences are circular:".red().bold())?;
    writeln!(out, "  {}", cycle.join(" > "))
}

/// Writes an order with any pairs it cannot yet tell apart.
///
/// # Errors
/// Returns error if writing fails.
pub fn write_order_report(
    out: &mut impl Write,
    topo: &TopologicalOrder,
    graph: &PreferenceGraph,
    pairs: &[Pair],
) -> io::Result<()> {
    for (rank, item) in topo.items(graph).into_iter().enumerate() {
        writeln!(out, "{:>3}. {}", rank + 1, label(item))?;
    }

    if pairs.is_empty() {
        return writeln!(out, "{}", "Order is fully determined.".green());
    }

    writeln!(
        out,
        "{}",
        format!("{} pair(s) still undecided:", pairs.len()).yellow()
    )?;
    for &(a, b) in pairs {
        let name = |id| graph.item(id).map_or("?", |i| i.name.as_str());
        writeln!(out, "  {} {} {}", name(a), "?".yellow(), name(b))?;
    }
    Ok(())
}

/// Writes a numbered pool listing.
///
/// # Errors
/// Returns error if writing fails.
pub fn write_pool(out: &mut impl Write, pool: &[Item]) -> io::Result<()> {
    for (i, item) in pool.iter().enumerate() {
        writeln!(out, "{:>3}. {}", i + 1, label(item))?;
    }
    writeln!(out, "{}", format!("{} item(s)", pool.len()).dimmed())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn result_puts_winner_first_and_rows_of_three() {
        colored::control::set_override(false);
        let items: Vec<Item> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|n| Item::new(*n, ""))
            .collect();
        let refs: Vec<&Item> = items.iter().collect();
        let mut buf = Vec::new();
        write_result(&mut buf, &refs, 4).unwrap();
        let text = plain(buf);

        assert!(text.contains("Your choice: a"));
        assert!(text.contains("  b › c › d\n"));
        assert!(text.contains("  e\n"));
        assert!(text.contains("4 comparison"));
    }

    #[test]
    fn icons_prefix_names() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        write_pool(&mut buf, &[Item::new("Cat", "🐱")]).unwrap();
        assert!(plain(buf).contains("1. 🐱 Cat"));
    }
}
