use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "twochoice", version, about = "Rank things by picking one of two")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Play a round: answer comparisons until the ranking is settled
    Play {
        /// Item pool file (alternating name / icon lines)
        #[arg(long, value_name = "FILE")]
        items: Option<PathBuf>,
        /// Items drawn per round
        #[arg(long, short = 'n')]
        count: Option<usize>,
        /// Seed for reproducible sampling and pair order
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Rank the whole pool from recorded preferences
    Order {
        #[arg(long, value_name = "FILE")]
        items: Option<PathBuf>,
        /// A preference such as "Cat>Dog" (repeatable)
        #[arg(long, short, value_name = "A>B")]
        prefer: Vec<String>,
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// List the item pool
    Pool {
        #[arg(long, value_name = "FILE")]
        items: Option<PathBuf>,
    },
}

/// Arguments for the Play command (used by handlers)
#[derive(Debug, Clone, Default)]
pub struct PlayArgs {
    pub items: Option<PathBuf>,
    pub count: Option<usize>,
    pub seed: Option<u64>,
}
