// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod dispatch;
pub mod handlers;
pub mod session;

pub use args::{Cli, Commands, PlayArgs};
