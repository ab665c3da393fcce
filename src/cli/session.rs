// src/cli/session.rs
//! Line-based play session: reads answers, feeds them to the loop, renders.

use crate::exit::TwoChoiceExit;
use crate::game::{GameLoop, GameState, Side};
use crate::reporting;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Pick(Side),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterRound {
    Restart,
    Quit,
}

/// Parses an answer to "which do you prefer?".
#[must_use]
pub fn parse_answer(line: &str) -> Option<Answer> {
    match line.trim().to_ascii_lowercase().as_str() {
        "1" | "l" | "left" | "<" => Some(Answer::Pick(Side::Left)),
        "2" | "r" | "right" | ">" => Some(Answer::Pick(Side::Right)),
        "q" | "quit" => Some(Answer::Quit),
        _ => None,
    }
}

/// Parses an answer to "play again?". Anything unrecognised quits.
#[must_use]
pub fn parse_after_round(line: &str) -> AfterRound {
    match line.trim().to_ascii_lowercase().as_str() {
        "r" | "restart" | "y" | "yes" => AfterRound::Restart,
        _ => AfterRound::Quit,
    }
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Drives `game` from `input` until the user quits or input runs out.
///
/// Quitting mid-round is `Abandoned`; quitting after a circular round is
/// `CyclicPreferences`.
///
/// # Errors
/// Returns error if reading input or writing output fails.
pub fn run(
    game: &mut GameLoop,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<TwoChoiceExit> {
    if game.state() == GameState::Idle {
        game.start();
    }

    loop {
        match game.state() {
            GameState::Idle => {
                game.start();
            }
            GameState::Active => {
                if let Some(exit) = ask_comparison(game, input, out)? {
                    return Ok(exit);
                }
            }
            GameState::Resolved => {
                if let Some(order) = game.order() {
                    reporting::write_result(out, &order, game.comparisons())?;
                }
                if ask_restart(input, out)? == AfterRound::Quit {
                    return Ok(TwoChoiceExit::Success);
                }
                game.restart();
            }
            GameState::Aborted => {
                reporting::write_abort(out, game.cycle().unwrap_or_default())?;
                if ask_restart(input, out)? == AfterRound::Quit {
                    return Ok(TwoChoiceExit::CyclicPreferences);
                }
                game.restart();
            }
        }
    }
}

fn ask_comparison(
    game: &mut GameLoop,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<TwoChoiceExit>> {
    let (Some(pair), Some((left, right))) = (game.current_pair(), game.current_items()) else {
        return Ok(Some(TwoChoiceExit::Error));
    };
    reporting::write_pair(out, game.comparisons() + 1, left, right)?;

    let Some(line) = read_line(input)? else {
        writeln!(out)?;
        return Ok(Some(TwoChoiceExit::Abandoned));
    };
    match parse_answer(&line) {
        Some(Answer::Pick(side)) => {
            game.submit(pair, side);
            Ok(None)
        }
        Some(Answer::Quit) => Ok(Some(TwoChoiceExit::Abandoned)),
        None => {
            writeln!(out, "{}", "Please answer 1 or 2.".yellow())?;
            Ok(None)
        }
    }
}

fn ask_restart(input: &mut impl BufRead, out: &mut impl Write) -> Result<AfterRound> {
    write!(out, "{} ", "Play again? (r to restart, q to quit)".dimmed())?;
    out.flush()?;
    Ok(read_line(input)?.map_or(AfterRound::Quit, |l| parse_after_round(&l)))
}
