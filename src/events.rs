// src/events.rs
//! Outbound game events and the machine-readable event log.
//!
//! Every observer sees the same [`GameEvent`] stream. The [`EventLogger`]
//! appends it to `.twochoice/events.jsonl`.

use crate::item::Item;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Default log location relative to the working directory.
pub const DEFAULT_EVENT_LOG: &str = ".twochoice/events.jsonl";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEvent {
    RoundStarted {
        items: Vec<Item>,
    },
    /// A new pair awaits a comparison.
    PairPresented {
        left: Item,
        right: Item,
    },
    ChoiceRecorded {
        preferred: Item,
        other: Item,
    },
    /// Final order, most preferred first.
    OrderResolved {
        order: Vec<Item>,
        comparisons: usize,
    },
    RoundFinished {
        top: Item,
    },
    RoundAborted {
        cycle: Vec<String>,
    },
    RoundReset,
}

/// Receives outbound events from a [`GameLoop`](crate::game::GameLoop).
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TwoChoiceEvent {
    pub timestamp: u64,
    pub kind: GameEvent,
}

#[derive(Clone)]
pub struct EventLogger {
    log_path: PathBuf,
}

impl EventLogger {
    /// Logs to `.twochoice/events.jsonl` under `root`.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self::at(root.join(DEFAULT_EVENT_LOG))
    }

    #[must_use]
    pub fn at(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.log_path
    }

    pub fn log(&self, kind: &GameEvent) {
        // Logging is best-effort. We swallow errors to avoid crashing main flow.
        if let Ok(json) = Self::serialize_event(kind) {
            let _ = self.append_to_file(&json);
        }
    }

    fn serialize_event(kind: &GameEvent) -> Result<String> {
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let event = TwoChoiceEvent {
            timestamp,
            kind: kind.clone(),
        };
        Ok(serde_json::to_string(&event)?)
    }

    fn append_to_file(&self, line: &str) -> Result<()> {
        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

impl GameObserver for EventLogger {
    fn on_event(&mut self, event: &GameEvent) {
        self.log(event);
    }
}
