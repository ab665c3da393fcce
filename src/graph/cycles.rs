// src/graph/cycles.rs
//! Cycle extraction for preference graphs.
//!
//! Ordering only says *that* a graph is circular. This module says *where*,
//! using Depth-First Search with an explicit recursion stack.

use super::preference::{NodeId, PreferenceGraph};

/// Finds all cycles reachable in creation order.
/// Each cycle lists its nodes and repeats the first one at the end.
#[must_use]
pub fn detect_cycles(graph: &PreferenceGraph) -> Vec<Vec<NodeId>> {
    let mut state = DfsState {
        visited: vec![false; graph.len()],
        on_stack: vec![false; graph.len()],
        path_stack: Vec::new(),
        cycles: Vec::new(),
    };

    for node in graph.ids() {
        if !state.is_visited(node) {
            dfs(node, graph, &mut state);
        }
    }

    state.cycles
}

/// The first cycle found, if any.
#[must_use]
pub fn first_cycle(graph: &PreferenceGraph) -> Option<Vec<NodeId>> {
    detect_cycles(graph).into_iter().next()
}

struct DfsState {
    visited: Vec<bool>,
    on_stack: Vec<bool>,
    path_stack: Vec<NodeId>,
    cycles: Vec<Vec<NodeId>>,
}

impl DfsState {
    fn is_visited(&self, node: NodeId) -> bool {
        self.visited.get(node.index()).copied().unwrap_or(true)
    }

    fn is_on_stack(&self, node: NodeId) -> bool {
        self.on_stack.get(node.index()).copied().unwrap_or(false)
    }

    fn set(flags: &mut [bool], node: NodeId, value: bool) {
        if let Some(slot) = flags.get_mut(node.index()) {
            *slot = value;
        }
    }
}

fn dfs(node: NodeId, graph: &PreferenceGraph, state: &mut DfsState) {
    DfsState::set(&mut state.visited, node, true);
    DfsState::set(&mut state.on_stack, node, true);
    state.path_stack.push(node);

    if let Some(n) = graph.node(node) {
        // Duplicate edges would report the same cycle twice.
        let mut neighbors = n.edges().to_vec();
        neighbors.sort_unstable();
        neighbors.dedup();
        for neighbor in neighbors {
            visit_neighbor(neighbor, graph, state);
        }
    }

    DfsState::set(&mut state.on_stack, node, false);
    state.path_stack.pop();
}

fn visit_neighbor(neighbor: NodeId, graph: &PreferenceGraph, state: &mut DfsState) {
    if !state.is_visited(neighbor) {
        dfs(neighbor, graph, state);
    } else if state.is_on_stack(neighbor) {
        record_cycle(neighbor, state);
    }
}

#[allow(clippy::indexing_slicing)] // Guarded: pos is from position() returning Some
fn record_cycle(neighbor: NodeId, state: &mut DfsState) {
    if let Some(pos) = state.path_stack.iter().position(|&x| x == neighbor) {
        let mut cycle = state.path_stack[pos..].to_vec();
        cycle.push(neighbor); // Close the loop visually
        state.cycles.push(cycle);
    }
}
