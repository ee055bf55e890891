//! Interactive assistant (solver mode)
//!
//! The user relays their guesses and the result codes the real game showed;
//! the assistant narrows the candidate set after every turn. Result codes use
//! `e` (exact), `c` (contains) and `a` (absent).

use crate::core::{Constraints, Feedback, WORD_LEN, Word, filter_candidates};
use crate::game::MAX_TURNS;
use crate::input::InputSource;
use crate::output::formatters::ordinal;
use anyhow::{Result, bail};
use colored::Colorize;

/// Run the assistant session
///
/// Re-prompts on malformed input; a guess outside the dictionary is only a
/// warning. Ends early on a win or on EOF.
///
/// # Errors
///
/// Returns an error on I/O failure, or when the supplied result codes
/// contradict every remaining candidate: that is a consistency violation, not
/// a recoverable input error, and the session terminates.
pub fn run_assist<I: InputSource>(dictionary: &[Word], input: &mut I) -> Result<()> {
    let mut candidates: Vec<Word> = dictionary.to_vec();

    println!("\nAssistant mode. After each guess, enter the result the game");
    println!("showed as {WORD_LEN} letters: e = exact, c = contains, a = absent.\n");

    for turn in 1..=MAX_TURNS {
        let guess = loop {
            let Some(line) = input.read_line(&format!("{} guess", ordinal(turn)))? else {
                return Ok(());
            };

            match Word::new(line.as_str()) {
                Ok(word) => {
                    if !dictionary.contains(&word) {
                        println!(
                            "{}",
                            format!("Warning: \"{word}\" not in word list").yellow()
                        );
                    }
                    break word;
                }
                Err(e) => println!("{e}"),
            }
        };

        // With one candidate left, guessing it is the win
        if candidates.len() == 1 && candidates[0] == guess {
            println!(
                "{}",
                format!("Congratulations, you won in {turn} turns!").bright_green()
            );
            return Ok(());
        }

        let feedback = loop {
            let Some(line) = input.read_line("Result (ex. caace)")? else {
                return Ok(());
            };

            match Feedback::from_codes(&line) {
                Some(feedback) => break feedback,
                None => println!("Result must be {WORD_LEN} letters from e, c and a"),
            }
        };

        if feedback.is_win() {
            if candidates.contains(&guess) {
                println!(
                    "{}",
                    format!("Congratulations, you won in {turn} turns!").bright_green()
                );
                return Ok(());
            }
            bail!("result codes contradict every remaining candidate");
        }

        let constraints = Constraints::from_feedback(&guess, &feedback);
        candidates = filter_candidates(&candidates, &constraints);

        if candidates.is_empty() {
            bail!("result codes contradict every remaining candidate");
        }

        let listing: Vec<&str> = candidates.iter().map(Word::text).collect();
        println!(
            "Possible words ({}): {}\n",
            candidates.len(),
            listing.join(", ")
        );
    }

    println!("Out of turns without a confirmed win.");
    Ok(())
}
