// src/graph/ambiguity.rs
//! Adjacent pairs in an order that no recorded comparison backs up.

use super::preference::{NodeId, PreferenceGraph};
use super::topo::TopologicalOrder;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Two adjacent nodes, in order (earlier, later).
pub type Pair = (NodeId, NodeId);

/// Every `(order[i], order[i+1])` without a direct edge `order[i] -> order[i+1]`.
///
/// Empty means the order is fully determined. Invalid orders yield nothing.
#[must_use]
pub fn ambiguous_pairs(topo: &TopologicalOrder, graph: &PreferenceGraph) -> Vec<Pair> {
    if !topo.is_valid() {
        return Vec::new();
    }
    topo.nodes()
        .windows(2)
        .filter_map(|w| match *w {
            [first, second] if !graph.is_directly_connected(first, second) => {
                Some((first, second))
            }
            _ => None,
        })
        .collect()
}

/// Uniform pick from `pairs`; `None` when empty.
pub fn pick_random<R: Rng + ?Sized>(pairs: &[Pair], rng: &mut R) -> Option<Pair> {
    pairs.choose(rng).copied()
}

/// Shorthand for `pick_random(&ambiguous_pairs(..))`.
pub fn random_ambiguous_pair<R: Rng + ?Sized>(
    topo: &TopologicalOrder,
    graph: &PreferenceGraph,
    rng: &mut R,
) -> Option<Pair> {
    pick_random(&ambiguous_pairs(topo, graph), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn abc() -> (PreferenceGraph, NodeId, NodeId, NodeId) {
        let g = PreferenceGraph::new(vec![
            Item::new("A", ""),
            Item::new("B", ""),
            Item::new("C", ""),
        ]);
        let (a, b, c) = (
            g.find("A").unwrap(),
            g.find("B").unwrap(),
            g.find("C").unwrap(),
        );
        (g, a, b, c)
    }

    #[test]
    fn no_edges_every_neighbour_is_ambiguous() {
        let (g, a, b, c) = abc();
        let topo = TopologicalOrder::compute(&g);
        assert_eq!(topo.nodes(), &[c, b, a]);
        assert_eq!(ambiguous_pairs(&topo, &g), vec![(c, b), (b, a)]);
    }

    #[test]
    fn chain_has_no_ambiguity() {
        let (mut g, a, b, c) = abc();
        g.add_edge(a, b);
        g.add_edge(b, c);
        let topo = TopologicalOrder::compute(&g);
        assert_eq!(topo.nodes(), &[a, b, c]);
        assert!(ambiguous_pairs(&topo, &g).is_empty());
    }

    #[test]
    fn transitive_edge_does_not_settle_neighbours() {
        let (mut g, a, b, c) = abc();
        g.add_edge(a, c);
        g.add_edge(b, c);
        let topo = TopologicalOrder::compute(&g);
        assert_eq!(topo.nodes(), &[b, a, c]);
        assert_eq!(ambiguous_pairs(&topo, &g), vec![(b, a)]);
    }

    #[test]
    fn resolving_an_ambiguous_pair_removes_it() {
        let (mut g, a, b, _) = abc();
        let before = ambiguous_pairs(&TopologicalOrder::compute(&g), &g);
        assert!(before.contains(&(b, a)));

        g.add_edge(b, a);
        let after = ambiguous_pairs(&TopologicalOrder::compute(&g), &g);
        assert!(!after.contains(&(b, a)));
        assert!(after.len() < before.len());
    }

    #[test]
    fn cyclic_order_reports_nothing() {
        let (mut g, a, b, c) = abc();
        g.add_edge(a, b);
        g.add_edge(b, c);
        g.add_edge(c, a);
        let topo = TopologicalOrder::compute(&g);
        assert!(ambiguous_pairs(&topo, &g).is_empty());
    }

    #[test]
    fn pick_random_is_none_on_empty_and_member_otherwise() {
        let (g, a, b, c) = abc();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pick_random(&[], &mut rng), None);

        let topo = TopologicalOrder::compute(&g);
        for _ in 0..20 {
            let pair = random_ambiguous_pair(&topo, &g, &mut rng).unwrap();
            assert!(pair == (c, b) || pair == (b, a));
        }
    }
}
