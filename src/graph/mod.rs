// src/graph/mod.rs
//! The preference-graph engine.
//!
//! A round builds a [`PreferenceGraph`] once, then each step derives a fresh
//! [`TopologicalOrder`] and asks it for [`ambiguity::ambiguous_pairs`]. An empty
//! answer means the ranking is settled.

pub mod ambiguity;
pub mod cycles;
pub mod preference;
pub mod topo;

pub use ambiguity::{ambiguous_pairs, pick_random, Pair};
pub use preference::{Node, NodeId, PreferenceGraph};
pub use topo::TopologicalOrder;
