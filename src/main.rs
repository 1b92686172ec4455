//! Wordle Game - CLI
//!
//! Terminal word-guessing game over a frequency-ranked vocabulary.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::{describe_pool, load_pool, run_play, score_guess},
    game::{
        DEFAULT_ATTEMPT_BUDGET, DEFAULT_LIMIT, DEFAULT_SEED, DEFAULT_WORD_LEN, GameConfig, Outcome,
    },
    output::{ConsoleRenderer, print_pool_report, print_score_result},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret word in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Corpus of `word,frequency` lines (default: embedded sample)
    #[arg(short, long, global = true)]
    corpus: Option<PathBuf>,

    /// Number of letters in every word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LEN)]
    word_len: usize,

    /// Only the most frequent LIMIT corpus entries are playable
    #[arg(long, global = true, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Scored guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_ATTEMPT_BUDGET)]
    attempts: u32,

    /// Seed for choosing the secret word
    #[arg(short, long, global = true, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one interactive game (default)
    Play,

    /// Score a guess against a known secret
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Show the playable word pool
    Pool {
        /// Number of top-ranked words to list
        #[arg(short = 'n', long, default_value = "20")]
        show: usize,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            word_len: self.word_len,
            limit: self.limit,
            attempt_budget: self.attempts,
            seed: self.seed,
            ..GameConfig::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.config();

    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(cli.corpus.as_deref(), &config),
        Commands::Score { secret, guess } => run_score_command(secret, guess),
        Commands::Pool { show } => run_pool_command(cli.corpus.as_deref(), &config, *show),
    }
}

fn run_play_command(corpus: Option<&Path>, config: &GameConfig) -> Result<()> {
    let pool = load_pool(corpus, config).with_context(|| corpus_context(corpus))?;

    let stdin = io::stdin();
    let mut out = ConsoleRenderer::new(io::stdout(), config.quit_token.clone());
    let state = run_play(&pool, config, stdin.lock(), &mut out)?;

    if state.outcome() == Outcome::Abandoned {
        println!("Thanks for playing!");
    }
    Ok(())
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(secret, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}

fn run_pool_command(
    corpus: Option<&Path>,
    config: &GameConfig,
    show: usize,
) -> Result<()> {
    let pool = load_pool(corpus, config).with_context(|| corpus_context(corpus))?;
    let report = describe_pool(&pool, show);
    print_pool_report(&report);

    if report.size == 0 {
        bail!(
            "empty pool for {}-letter words within the top {}",
            report.word_len,
            report.limit
        );
    }
    Ok(())
}

fn corpus_context(corpus: Option<&Path>) -> String {
    corpus.map_or_else(
        || "Failed to build pool from embedded corpus".to_string(),
        |path| format!("Failed to build pool from '{}'", path.display()),
    )
}
