use clap::Parser;
use colored::Colorize;
use twochoice_core::cli::{self, Cli};
use twochoice_core::exit::TwoChoiceExit;

fn main() -> TwoChoiceExit {
    let cli = Cli::parse();

    match cli::dispatch::execute(cli.command) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            TwoChoiceExit::from(&e)
        }
    }
}
