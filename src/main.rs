use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use scrambler::errors::ScrambleError;
use scrambler::scramble::board::{Board, BonusSquares};
use scrambler::scramble::dictionary::DictionarySource;
use scrambler::scramble::engine::{scramble_board, DuplicatePolicy, ScrambleOptions};
use scrambler::scramble::report::Report;

/// Calculate all possible words (and their score) for a game of scramble.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Letters in the board, row by row
    #[arg(value_name = "BOARD")]
    board: String,

    /// Word list, one word per line
    #[arg(short, long, default_value = "TWL06.txt")]
    dictionary: PathBuf,

    /// Location of double word score letters
    #[arg(short = 'W', long)]
    double_word: Vec<usize>,

    /// Location of double letter score letters
    #[arg(short = 'l', long)]
    double_letter: Vec<usize>,

    /// Location of triple word score letters
    #[arg(short = 'T', long)]
    triple_word: Vec<usize>,

    /// Location of triple letter score letters
    #[arg(short = 't', long)]
    triple_letter: Vec<usize>,

    /// JSON file of bonus squares, merged with the flags above
    #[arg(short, long)]
    bonus_file: Option<PathBuf>,

    /// Keep the highest scoring path when a word can be found more than once
    #[arg(long)]
    best_path: bool,

    /// Only load words whose letters all appear on the board
    #[arg(short, long)]
    restrict: bool,

    /// Trie snapshot to load, or to write after building from the word list.
    /// Not used with --restrict
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Print the results as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging (also enabled by SCRAMBLER_DEBUG)
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var("SCRAMBLER_DEBUG").is_ok();
    scrambler::log::init_logger(debug_enabled);

    if let Err(e) = try_main(cli) {
        if let Some(err) = e.downcast_ref::<ScrambleError>() {
            eprintln!("Error: {}", err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn bonus_squares(cli: &Cli) -> Result<BonusSquares, ScrambleError> {
    let mut bonus = BonusSquares {
        dw: cli.double_word.iter().copied().collect(),
        dl: cli.double_letter.iter().copied().collect(),
        tw: cli.triple_word.iter().copied().collect(),
        tl: cli.triple_letter.iter().copied().collect(),
    };
    if let Some(path) = &cli.bonus_file {
        bonus.merge(&BonusSquares::from_file(path)?);
    }
    bonus.validate()?;
    Ok(bonus)
}

fn try_main(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let board = Board::parse(&cli.board)?;
    let options = ScrambleOptions {
        bonus: bonus_squares(&cli)?,
        duplicates: if cli.best_path {
            DuplicatePolicy::BestScore
        } else {
            DuplicatePolicy::LastPath
        },
    };

    let t_load = Instant::now();
    let letters = board.letters();
    let source = DictionarySource {
        words: &cli.dictionary,
        snapshot: cli.snapshot.as_deref(),
        restrict_to: cli.restrict.then_some(letters.as_str()),
    };
    let trie = source.load()?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let t_solve = Instant::now();
    let found = scramble_board(&board, &options, &trie)?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    let report = Report::new(&found);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    eprintln!(
        "Loaded {} words in {:.3}s; scrambled in {:.3}s ({} found).",
        trie.word_count(),
        load_secs,
        solve_secs,
        report.len()
    );

    Ok(())
}
