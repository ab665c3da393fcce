// src/config/mod.rs
pub mod types;

pub use self::types::{Config, GameConfig, Preferences, TwoChoiceToml};
use crate::error::{Result, TwoChoiceError};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "twochoice.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new config and applies `twochoice.toml` from the working directory.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        config.load_local_config();
        config
    }

    pub fn load_local_config(&mut self) {
        self.load_from(Path::new(CONFIG_FILE));
    }

    /// Applies the file at `path` if it exists. A malformed file keeps defaults.
    pub fn load_from(&mut self, path: &Path) {
        let Ok(content) = fs::read_to_string(path) else {
            return;
        };
        if let Err(e) = self.parse_toml(&content) {
            eprintln!(
                "{} ignoring {}: {e}",
                "warning:".yellow().bold(),
                path.display()
            );
        }
    }

    /// Parses TOML text and replaces the current settings.
    ///
    /// # Errors
    /// Returns error if the text is not valid `twochoice.toml`.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        let parsed: TwoChoiceToml = toml::from_str(content)?;
        self.game = parsed.game;
        self.preferences = parsed.preferences;
        Ok(())
    }

    /// Items per round, never zero.
    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.game.sample_size.max(1)
    }

    #[must_use]
    pub fn items_path(&self) -> PathBuf {
        PathBuf::from(&self.game.items)
    }

    #[must_use]
    pub fn event_log_path(&self) -> Option<PathBuf> {
        self.preferences
            .event_log
            .then(|| PathBuf::from(&self.preferences.event_log_path))
    }

    /// Saves the current configuration to `twochoice.toml` under `dir`.
    ///
    /// # Errors
    /// Returns error if serialization or the file write fails.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let doc = TwoChoiceToml {
            game: self.game.clone(),
            preferences: self.preferences.clone(),
        };
        let text = toml::to_string_pretty(&doc).map_err(|e| TwoChoiceError::Other(e.to_string()))?;
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, text).map_err(|e| TwoChoiceError::io_at(e, path))
    }
}
