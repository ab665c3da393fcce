//! # `twochoice`
//!
//! Ranks a handful of items by asking "which of these two?" until the
//! answers pin down a single order.
//!
//! Answers accumulate as edges in a [`graph::PreferenceGraph`]. Every step
//! derives a [`graph::TopologicalOrder`] and looks for adjacent entries that
//! no answer separates directly. The [`game::GameLoop`] asks about one of
//! those and stops once none remain, usually long before all `n·(n-1)/2`
//! pairs have been seen.

pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod exit;
pub mod game;
pub mod graph;
pub mod item;
pub mod reporting;
