// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TwoChoiceError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Item pool is empty")]
    EmptyPool,

    #[error("Malformed item pool at line {line}: {reason}")]
    MalformedPool { line: usize, reason: String },

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Malformed preference '{0}' (expected \"A>B\" or \"A<B\")")]
    MalformedPreference(String),

    #[error("Preferences are circular: {}", cycle.join(" > "))]
    CyclicGraph { cycle: Vec<String> },

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TwoChoiceError>;

// Allow `?` on std::io::Error by converting to TwoChoiceError::Io with unknown path.
impl From<std::io::Error> for TwoChoiceError {
    fn from(source: std::io::Error) -> Self {
        TwoChoiceError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl TwoChoiceError {
    /// Attaches the offending path to an I/O error.
    #[must_use]
    pub fn io_at(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        TwoChoiceError::Io {
            source,
            path: path.into(),
        }
    }
}
