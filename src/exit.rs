// src/exit.rs
//! Process exit codes for `twochoice`.
//!
//! Scripts driving `twochoice order` rely on these staying stable.

use crate::error::TwoChoiceError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum TwoChoiceExit {
    /// Ranking printed, or the user quit after a settled round.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Bad pool file, unknown item, or malformed preference.
    InvalidInput = 2,
    /// The recorded preferences contain a cycle.
    CyclicPreferences = 3,
    /// The user quit before the order was settled.
    Abandoned = 4,
}

impl TwoChoiceExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for TwoChoiceExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&anyhow::Error> for TwoChoiceExit {
    /// Classifies a handler failure by the library error underneath it.
    fn from(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<TwoChoiceError>() {
            Some(
                TwoChoiceError::EmptyPool
                | TwoChoiceError::MalformedPool { .. }
                | TwoChoiceError::UnknownItem(_)
                | TwoChoiceError::MalformedPreference(_),
            ) => Self::InvalidInput,
            Some(TwoChoiceError::CyclicGraph { .. }) => Self::CyclicPreferences,
            _ => Self::Error,
        }
    }
}
