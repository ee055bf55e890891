//! Interactive game mode
//!
//! Runs full games against a hidden answer, with optional assistance:
//! level 0 is the plain game, level 1 adds letter bookkeeping and level 2
//! additionally lists the remaining candidates.

use crate::core::Word;
use crate::game::{AssistanceLevel, Game, Phase};
use crate::input::InputSource;
use crate::output::formatters::{feedback_row, ordinal, skeleton_row};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::prelude::IndexedRandom;

/// Run game sessions until the player declines a replay
///
/// An explicit secret applies to the first game only; replays always draw a
/// fresh random answer.
///
/// # Errors
///
/// Returns an error on I/O failure or when the answer list is empty.
pub fn run_play<I: InputSource>(
    answers: &[Word],
    dictionary: &[Word],
    secret: Option<Word>,
    assistance: Option<AssistanceLevel>,
    input: &mut I,
) -> Result<()> {
    let assistance = match assistance {
        Some(level) => level,
        None => match prompt_assistance(input)? {
            Some(level) => level,
            None => return Ok(()),
        },
    };

    let mut secret = secret;
    loop {
        let answer = match secret.take() {
            Some(word) => word,
            None => answers
                .choose(&mut rand::rng())
                .context("answer list is empty")?
                .clone(),
        };

        if !play_one(answer, dictionary, assistance, input)? {
            return Ok(());
        }

        let Some(line) = input.read_line("Play again? (y/n)")? else {
            return Ok(());
        };
        if !line.eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }
}

fn prompt_assistance<I: InputSource>(input: &mut I) -> Result<Option<AssistanceLevel>> {
    loop {
        let Some(line) = input.read_line("Assistance level? (0 = none, 1 = letters, 2 = candidates)")?
        else {
            return Ok(None);
        };

        match line.parse::<u8>().ok().and_then(AssistanceLevel::from_level) {
            Some(level) => return Ok(Some(level)),
            None => println!("Enter 0, 1 or 2"),
        }
    }
}

/// Play a single game; returns false when input ended mid-game
fn play_one<I: InputSource>(
    secret: Word,
    dictionary: &[Word],
    assistance: AssistanceLevel,
    input: &mut I,
) -> Result<bool> {
    let mut game = Game::new(secret, dictionary.to_vec(), assistance);
    println!();

    while game.phase() == Phase::AwaitingGuess {
        let Some(line) = input.read_line(&format!("Enter your {} guess", ordinal(game.turn() + 1)))?
        else {
            return Ok(false);
        };

        let report = match game.play(&line) {
            Ok(report) => report,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        render_board(&game);

        match report.phase {
            Phase::Won => println!(
                "{}",
                format!("Congratulations, you won in {} turns!", report.turn).bright_green()
            ),
            Phase::Lost => println!(
                "You lost :( Wordle: {}",
                game.secret().text().to_uppercase().bold()
            ),
            Phase::AwaitingGuess | Phase::Evaluating => {}
        }
    }

    Ok(true)
}

fn render_board(game: &Game) {
    if game.assistance() >= AssistanceLevel::Letters {
        println!("  {}", skeleton_row(game.tracker().exact_positions()));
    }

    for (guess, feedback) in game.history() {
        println!("  {}", feedback_row(guess, feedback));
    }

    if game.assistance() >= AssistanceLevel::Letters {
        let required: Vec<String> = game
            .tracker()
            .required_display()
            .into_iter()
            .map(|(letter, count)| format!("{}x{count}", letter.to_ascii_uppercase()))
            .collect();
        let remaining: String = game
            .tracker()
            .remaining_letters()
            .into_iter()
            .map(|l| l.to_ascii_uppercase())
            .collect();
        println!("  Required: {}", required.join(" "));
        println!("  Remaining: {remaining}");
    }

    if game.assistance() == AssistanceLevel::Candidates {
        let listing: Vec<&str> = game.candidates().iter().map(Word::text).collect();
        println!(
            "  Possible words ({}): {}",
            game.candidates().len(),
            listing.join(", ")
        );
    }

    println!();
}
