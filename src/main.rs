//! Wordle Coach - CLI
//!
//! Play the game, run the interactive assistant, or score guesses offline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_coach::{
    commands::{analyze_word, frequency_report, load_weights, rank_guesses, run_assist, run_play},
    core::Word,
    game::AssistanceLevel,
    input::StdinInput,
    output::{print_analysis_result, print_frequency_tables, print_rank_results},
    solver::ScoreCache,
    wordlists::{ALLOWED, ANSWERS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_coach",
    about = "Five-letter word game with assistance levels and offline guess scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default), 'answers', or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play {
        /// Assistance level: 0 none, 1 letter tracking, 2 candidate listing
        #[arg(short, long)]
        assistance: Option<u8>,

        /// Fix the secret word instead of drawing one at random
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Interactive assistant for a game running elsewhere
    Assist,

    /// Score one word by average candidate eliminations
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Score several words and report running best guesses
    Rank {
        /// Words to score
        #[arg(required = true)]
        words: Vec<String>,

        /// Score cache file to reuse and update
        #[arg(short, long)]
        cache: Option<PathBuf>,

        /// List every word instead of the improving ones only
        #[arg(short, long)]
        list_all: bool,
    },

    /// Letter frequency tables, overall and per position
    Freq {
        /// Word weight file ("word weight" per line)
        #[arg(long)]
        weights: Option<PathBuf>,
    },
}

/// Load wordlists based on the -w flag
///
/// Returns (`dictionary`, `answer_candidates`)
fn load_wordlists(wordlist_mode: &str) -> Result<(Vec<Word>, Vec<Word>)> {
    use wordle_coach::wordlists::loader::{dedup_sorted, load_from_file};

    match wordlist_mode {
        "all" => Ok((words_from_slice(ALLOWED), words_from_slice(ANSWERS))),
        "answers" => {
            let answer_words = words_from_slice(ANSWERS);
            Ok((answer_words.clone(), answer_words))
        }
        path => {
            let custom_words = dedup_sorted(
                load_from_file(path).with_context(|| format!("loading wordlist {path}"))?,
            );
            Ok((custom_words.clone(), custom_words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (dictionary, answers) = load_wordlists(&cli.wordlist)?;

    let command = cli.command.unwrap_or(Commands::Play {
        assistance: None,
        secret: None,
    });

    match command {
        Commands::Play { assistance, secret } => {
            run_play_command(assistance, secret.as_deref(), &answers, &dictionary)
        }
        Commands::Assist => run_assist(&dictionary, &mut StdinInput),
        Commands::Analyze { word } => run_analyze_command(&word, &dictionary, &answers),
        Commands::Rank {
            words,
            cache,
            list_all,
        } => run_rank_command(&words, cache.as_deref(), list_all, &dictionary, &answers),
        Commands::Freq { weights } => run_freq_command(weights.as_deref(), &answers),
    }
}

fn run_play_command(
    assistance: Option<u8>,
    secret: Option<&str>,
    answers: &[Word],
    dictionary: &[Word],
) -> Result<()> {
    let assistance = assistance
        .map(|level| {
            AssistanceLevel::from_level(level)
                .with_context(|| format!("assistance level must be 0, 1 or 2, got {level}"))
        })
        .transpose()?;

    let secret = secret
        .map(|s| Word::new(s).map_err(|e| anyhow::anyhow!("invalid secret: {e}")))
        .transpose()?;

    run_play(answers, dictionary, secret, assistance, &mut StdinInput)
}

fn run_analyze_command(word: &str, dictionary: &[Word], candidates: &[Word]) -> Result<()> {
    let result = analyze_word(word, dictionary, candidates).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_rank_command(
    words: &[String],
    cache_path: Option<&std::path::Path>,
    list_all: bool,
    dictionary: &[Word],
    candidates: &[Word],
) -> Result<()> {
    let mut cache = match cache_path {
        Some(path) => ScoreCache::load(path).with_context(|| format!("loading cache {}", path.display()))?,
        None => ScoreCache::new(),
    };

    let results = rank_guesses(words, dictionary, candidates, &mut cache)
        .map_err(|e| anyhow::anyhow!(e))?;
    print_rank_results(&results, list_all);

    if let Some(path) = cache_path {
        cache
            .save(path)
            .with_context(|| format!("saving cache {}", path.display()))?;
    }
    Ok(())
}

fn run_freq_command(weights_path: Option<&std::path::Path>, words: &[Word]) -> Result<()> {
    let weights = weights_path
        .map(|path| load_weights(path).with_context(|| format!("loading weights {}", path.display())))
        .transpose()?;

    let tables = frequency_report(words, weights.as_ref());
    print_frequency_tables(&tables);
    Ok(())
}
