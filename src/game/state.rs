// src/game/state.rs
use crate::graph::Pair;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a round stands. Input handlers query this instead of tracking their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// No round in progress.
    Idle,
    /// Waiting for a comparison on the current pair.
    Active,
    /// Final order available.
    Resolved,
    /// Preferences turned out circular; restart required.
    Aborted,
}

impl GameState {
    /// True once a round has ended, either way.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved | Self::Aborted)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Active => "active",
            Self::Resolved => "resolved",
            Self::Aborted => "aborted",
        };
        f.write_str(label)
    }
}

/// Which of the two presented items the user preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Splits `(left, right)` into `(preferred, other)`.
    #[must_use]
    pub fn split(self, pair: Pair) -> Pair {
        match self {
            Self::Left => pair,
            Self::Right => (pair.1, pair.0),
        }
    }
}

/// What a loop operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Stale, mismatched, or out-of-state input. Nothing changed.
    Ignored,
    /// A new pair is waiting, shown as `(left, right)`.
    Presented(Pair),
    Resolved,
    Aborted,
}
