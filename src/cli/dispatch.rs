//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::{Commands, PlayArgs},
    handlers::{handle_order, handle_play, handle_pool},
};
use crate::exit::TwoChoiceExit;
use anyhow::Result;

/// Executes the parsed command. No command means `play` with defaults.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Option<Commands>) -> Result<TwoChoiceExit> {
    match command {
        None => handle_play(&PlayArgs::default()),
        Some(Commands::Play { items, count, seed }) => {
            handle_play(&PlayArgs { items, count, seed })
        }
        Some(Commands::Order { items, prefer, json }) => {
            handle_order(items.as_deref(), &prefer, json)
        }
        Some(Commands::Pool { items }) => handle_pool(items.as_deref()),
    }
}
