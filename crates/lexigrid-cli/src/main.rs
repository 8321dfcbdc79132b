//! Command-line word-search generator.
//!
//! Prints the seed, the board and the list of hidden words. Words that could
//! not be placed are reported on stderr as `<row,col>` lines naming the start
//! position that failed.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin lexigrid -- crossword cry
//! ```
//!
//! Reproduce a puzzle from a printed seed, or from any phrase:
//!
//! ```sh
//! cargo run --bin lexigrid -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1 crossword cry
//! cargo run --bin lexigrid -- --seed-phrase "sunday paper" crossword cry
//! ```
//!
//! Larger boards and the letter-preserving conflict rule:
//!
//! ```sh
//! cargo run --bin lexigrid -- --width 15 --height 12 --conflict-rule cell-letter rust crate trait
//! ```
//!
//! Set `RUST_LOG=debug` to trace direction retries.

use std::process;

use clap::{Parser, ValueEnum};
use lexigrid_generator::{
    ConflictRule, GeneratedPuzzle, GeneratorConfig, PuzzleGenerator, PuzzleSeed, parse_words,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConflictRuleArg {
    /// Compare with the earlier word's letter at the same step index.
    StepIndex,
    /// Compare with the letter already on the board.
    CellLetter,
}

impl From<ConflictRuleArg> for ConflictRule {
    fn from(arg: ConflictRuleArg) -> Self {
        match arg {
            ConflictRuleArg::StepIndex => ConflictRule::StepIndex,
            ConflictRuleArg::CellLetter => ConflictRule::CellLetter,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Words to hide in the board (lowercase a-z).
    #[arg(value_name = "WORD", required = true)]
    words: Vec<String>,

    /// Number of columns.
    #[arg(long, default_value_t = GeneratorConfig::DEFAULT_SIZE)]
    width: usize,

    /// Number of rows.
    #[arg(long, default_value_t = GeneratorConfig::DEFAULT_SIZE)]
    height: usize,

    /// Seed as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "seed_phrase")]
    seed: Option<PuzzleSeed>,

    /// Derive the seed from arbitrary text.
    #[arg(long, value_name = "TEXT")]
    seed_phrase: Option<String>,

    /// How crossings with earlier words are checked.
    #[arg(long, value_name = "RULE", default_value = "step-index")]
    conflict_rule: ConflictRuleArg,

    /// Boundary-biased start positions to try when the first one admits no direction.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    resample_rounds: usize,

    /// Fail instead of skipping words longer than both board dimensions.
    #[arg(long)]
    strict: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let words = match parse_words(&args.words) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{e}: {}", error_source(&e));
            process::exit(2);
        }
    };

    let config = GeneratorConfig {
        width: args.width,
        height: args.height,
        conflict_rule: args.conflict_rule.into(),
        resample_rounds: args.resample_rounds,
        reject_oversized_words: args.strict,
    };
    let seed = args
        .seed
        .or_else(|| args.seed_phrase.as_deref().map(PuzzleSeed::from_phrase))
        .unwrap_or_else(PuzzleSeed::random);
    log::debug!("generating with {config:?}, seed {seed}");

    let generator = PuzzleGenerator::new(config);
    match generator.generate_with_seed(&words, seed) {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn error_source(e: &dyn std::error::Error) -> String {
    e.source().map(ToString::to_string).unwrap_or_default()
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    if let Some(seed) = puzzle.seed {
        println!("Seed:");
        println!("  {seed}");
        println!();
    }

    println!("Board:");
    for line in puzzle.board.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Words:");
    for placed in &puzzle.placed {
        println!(
            "  {}: {} going {}",
            placed.word, placed.start, placed.direction
        );
    }

    for skipped in &puzzle.skipped {
        eprintln!("{skipped}");
    }
}
