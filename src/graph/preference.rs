// src/graph/preference.rs
//! Directed "preferred-over" graph over a fixed set of items.

use crate::item::Item;
use std::fmt;

/// Stable index of a node within its graph (creation order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One item in the graph plus the nodes it is preferred over.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    item: Item,
    /// Targets in insertion order. Duplicates are kept.
    edges: Vec<NodeId>,
}

impl Node {
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.item.name
    }

    /// Nodes this one was preferred over, oldest first.
    #[must_use]
    pub fn edges(&self) -> &[NodeId] {
        &self.edges
    }
}

/// Append-only preference graph: nodes fixed at construction, edges only grow.
#[derive(Debug, Clone)]
pub struct PreferenceGraph {
    nodes: Vec<Node>,
}

impl PreferenceGraph {
    /// Creates one node per item, no edges.
    ///
    /// An empty item list yields an empty graph; rounds never build one.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        let nodes = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| Node {
                id: NodeId(i),
                item,
                edges: Vec::new(),
            })
            .collect();
        Self { nodes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in creation order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node ids in creation order.
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|n| n.id)
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn item(&self, id: NodeId) -> Option<&Item> {
        self.node(id).map(Node::item)
    }

    /// Looks a node up by item name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.item.name == name).map(|n| n.id)
    }

    /// Records that `from` is preferred over `to`.
    ///
    /// No cycle or duplicate check happens here; ordering reports cycles.
    /// Returns `false` (and records nothing) if either id is foreign to this graph.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        if to.0 >= self.nodes.len() {
            return false;
        }
        match self.nodes.get_mut(from.0) {
            Some(node) => {
                node.edges.push(to);
                true
            }
            None => false,
        }
    }

    /// True iff an edge `from -> to` exists. Direction matters.
    #[must_use]
    pub fn is_directly_connected(&self, from: NodeId, to: NodeId) -> bool {
        self.node(from).is_some_and(|n| n.edges.contains(&to))
    }

    /// All edges as `(from, to)`, grouped by source in creation order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes
            .iter()
            .flat_map(|n| n.edges.iter().map(move |&to| (n.id, to)))
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }
}
