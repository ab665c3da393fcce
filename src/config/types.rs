use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    #[serde(default = "default_items")]
    pub items: String,
    /// Fixes item sampling and pair choice when set.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            items: default_items(),
            seed: None,
        }
    }
}

const fn default_sample_size() -> usize { crate::item::DEFAULT_SAMPLE_SIZE }
fn default_items() -> String { "items.txt".to_string() }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_true")]
    pub event_log: bool,
    #[serde(default = "default_event_log_path")]
    pub event_log_path: String,
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            event_log: true,
            event_log_path: default_event_log_path(),
            color: true,
        }
    }
}

const fn default_true() -> bool { true }
fn default_event_log_path() -> String { crate::events::DEFAULT_EVENT_LOG.to_string() }

/// On-disk shape of `twochoice.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TwoChoiceToml {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    pub preferences: Preferences,
}
