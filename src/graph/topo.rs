// src/graph/topo.rs
//! Most-to-least preferred ordering via depth-first search.
//!
//! Finished nodes are prepended, so a node lands ahead of everything it can
//! reach. Roots are entered in creation order and each node's edges
//! newest-first. Nodes without a relation therefore come out in reverse
//! creation order: `[A, B, C]` with no edges orders as `[C, B, A]`.

use super::cycles;
use super::preference::{NodeId, PreferenceGraph};
use crate::error::{Result, TwoChoiceError};
use crate::item::Item;
use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Finished,
}

/// Back-edge found during the search.
struct CycleFound;

/// Snapshot ordering of a graph. Never mutated after [`compute`](Self::compute).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalOrder {
    order: Vec<NodeId>,
    valid: bool,
}

impl TopologicalOrder {
    /// Orders every node of `graph` so that each edge points forward.
    ///
    /// If the graph has a cycle the result is flagged invalid and its
    /// sequence is partial; do not read it.
    #[must_use]
    pub fn compute(graph: &PreferenceGraph) -> Self {
        let mut search = Search {
            graph,
            marks: vec![Mark::Unvisited; graph.len()],
            order: VecDeque::with_capacity(graph.len()),
        };

        let mut valid = true;
        for root in graph.ids() {
            if search.mark(root) == Mark::Unvisited && search.visit(root).is_err() {
                valid = false;
                break;
            }
        }

        Self {
            order: search.order.into(),
            valid,
        }
    }

    /// True if the graph was acyclic when computed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Node ids, most preferred first.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Most preferred node, if the order is valid and non-empty.
    #[must_use]
    pub fn top(&self) -> Option<NodeId> {
        if self.valid {
            self.order.first().copied()
        } else {
            None
        }
    }

    /// Position of `id` in the order.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.order.iter().position(|&n| n == id)
    }

    /// Resolves the order into items.
    #[must_use]
    pub fn items<'g>(&self, graph: &'g PreferenceGraph) -> Vec<&'g Item> {
        self.order.iter().filter_map(|&id| graph.item(id)).collect()
    }

    /// Fails with `CyclicGraph` (naming the cycle) when the order is invalid.
    ///
    /// # Errors
    /// Returns `TwoChoiceError::CyclicGraph` if the graph was cyclic.
    pub fn ensure_valid(&self, graph: &PreferenceGraph) -> Result<()> {
        if self.valid {
            return Ok(());
        }
        let cycle = cycles::first_cycle(graph)
            .map(|ids| names(graph, &ids))
            .unwrap_or_default();
        Err(TwoChoiceError::CyclicGraph { cycle })
    }

    /// Consumes the order, keeping it only if it is valid.
    ///
    /// # Errors
    /// Returns `TwoChoiceError::CyclicGraph` if the graph was cyclic.
    pub fn into_result(self, graph: &PreferenceGraph) -> Result<Self> {
        self.ensure_valid(graph)?;
        Ok(self)
    }

    /// Joins item names with `", "`.
    #[must_use]
    pub fn display<'a>(&'a self, graph: &'a PreferenceGraph) -> OrderDisplay<'a> {
        OrderDisplay { order: self, graph }
    }
}

fn names(graph: &PreferenceGraph, ids: &[NodeId]) -> Vec<String> {
    ids.iter()
        .filter_map(|&id| graph.item(id).map(|i| i.name.clone()))
        .collect()
}

/// `Display` adapter returned by [`TopologicalOrder::display`].
pub struct OrderDisplay<'a> {
    order: &'a TopologicalOrder,
    graph: &'a PreferenceGraph,
}

impl fmt::Display for OrderDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = names(self.graph, self.order.nodes());
        f.write_str(&names.join(", "))
    }
}

struct Search<'g> {
    graph: &'g PreferenceGraph,
    marks: Vec<Mark>,
    order: VecDeque<NodeId>,
}

impl Search<'_> {
    fn mark(&self, id: NodeId) -> Mark {
        self.marks.get(id.index()).copied().unwrap_or(Mark::Finished)
    }

    fn set_mark(&mut self, id: NodeId, mark: Mark) {
        if let Some(slot) = self.marks.get_mut(id.index()) {
            *slot = mark;
        }
    }

    fn visit(&mut self, id: NodeId) -> std::result::Result<(), CycleFound> {
        match self.mark(id) {
            Mark::InProgress => Err(CycleFound),
            Mark::Finished => Ok(()),
            Mark::Unvisited => {
                self.set_mark(id, Mark::InProgress);
                let graph = self.graph;
                if let Some(node) = graph.node(id) {
                    for &next in node.edges().iter().rev() {
                        self.visit(next)?;
                    }
                }
                self.set_mark(id, Mark::Finished);
                self.order.push_front(id);
                Ok(())
            }
        }
    }
}
