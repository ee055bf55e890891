//! Terminal presentation for the offline commands

use crate::commands::analyze::AnalysisResult;
use crate::commands::rank::RankedGuess;
use crate::output::formatters::ORDINALS;
use crate::solver::{FrequencyTables, ranked_letters};
use colored::Colorize;

/// Print a single-word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    if !result.in_dictionary {
        println!(
            "{}",
            format!("Warning: \"{}\" not in word list", result.word).yellow()
        );
    }

    println!(
        "\"{}\" eliminates {:.3} of {} candidates on average",
        result.word.to_uppercase().bold(),
        result.score,
        result.total_candidates
    );
}

/// Print ranked guesses, reporting each running maximum as it appears
///
/// With `list_all` every guess is printed in input order; otherwise only the
/// guesses that improved on everything before them are shown.
pub fn print_rank_results(results: &[RankedGuess], list_all: bool) {
    let mut best = f64::NEG_INFINITY;

    for ranked in results {
        let improved = ranked.score > best;
        if improved {
            best = ranked.score;
        }

        if !improved && !list_all {
            continue;
        }

        let mut line = format!("{}  {:.3}", ranked.word.to_uppercase().bold(), ranked.score);
        if improved {
            line.push_str(&format!("  {}", "New best!".bright_green()));
        }
        if ranked.cached {
            line.push_str("  (cached)");
        }
        if !ranked.in_dictionary {
            line.push_str(&format!("  {}", "not in word list".yellow()));
        }
        println!("{line}");
    }
}

/// Print letter frequencies, most common first
pub fn print_frequency_tables(tables: &FrequencyTables) {
    let overall: String = ranked_letters(&tables.overall)
        .into_iter()
        .map(|l| l.to_ascii_uppercase())
        .collect();
    println!("Overall frequency order: {overall}");

    for (position, table) in tables.by_position.iter().enumerate() {
        let row: String = ranked_letters(table)
            .into_iter()
            .map(|l| l.to_ascii_uppercase())
            .collect();
        println!("  {} position: {row}", ORDINALS[position]);
    }
}
