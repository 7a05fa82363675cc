//! Wordle Sieve CLI
//!
//! Play a game, filter the dictionary with the feedback of previous guesses,
//! or print letter statistics and opening sequences.

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use wordle_sieve::config::{self, MAX_SEARCH_DEPTH, MAX_SEARCH_WIDTH, MAX_SEQUENCE_DEPTH};
use wordle_sieve::{
    benchmark_guess_distribution, build_opening_report, filter, load_dictionary, select_best,
    ConstraintModel, Dictionary, DictionaryError, FeedbackPattern, Game, GameStatus, KeyState,
    LetterReport, Word, WordleSolver, MAX_TRIES,
};

#[derive(Debug, Parser)]
#[command(name = "wordle-sieve", version, about)]
struct Cli {
    /// Dictionary file of whitespace-separated five-letter words.
    /// Defaults to the embedded dictionary.
    #[arg(short, long, env = config::DICTIONARY_ENV, global = true)]
    dictionary: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Guess a word picked from the dictionary (the default).
    Play {
        /// Game number: index of the word in the dictionary. Random if omitted.
        #[arg(short, long)]
        game: Option<usize>,
    },
    /// List the words matching previous feedback and suggest the next guess.
    ///
    /// Feedback is a series of rounds of five (code, letter) pairs, with codes
    /// r (right position), w (wrong position) and n (not in word). For
    /// example `rsnlwawtne` is a guess of "slate" where s is right, l and e
    /// are not in the word, a and t are at a wrong position.
    Solve {
        /// Encoded feedback rounds, at most six.
        data: String,
    },
    /// Print letter frequencies and the best opening sequences.
    Stats {
        #[arg(long, default_value_t = MAX_SEARCH_DEPTH)]
        depth: usize,
        #[arg(long, default_value_t = MAX_SEARCH_WIDTH)]
        width: usize,
        /// Levels of the opening tree to print.
        #[arg(long, default_value_t = MAX_SEQUENCE_DEPTH)]
        show: usize,
    },
    /// Solve interactively: enter each guess and the feedback it received.
    Assist,
    /// Solve every dictionary word and print the guess distribution.
    Benchmark,
}

fn load(path: Option<&PathBuf>) -> Result<Dictionary, DictionaryError> {
    match path {
        Some(path) => Dictionary::load(path),
        None => load_dictionary(),
    }
}

fn keyboard_line(game: &Game<'_>) -> String {
    (b'a'..=b'z')
        .filter_map(|letter| {
            let mark = match game.key(letter) {
                KeyState::Unknown => return None,
                KeyState::Absent => '⬛',
                KeyState::WrongPosition => '🟨',
                KeyState::Exact => '🟩',
            };
            Some(format!("{}{}", letter as char, mark))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn run_play(dictionary: &Dictionary, number: Option<usize>) -> io::Result<()> {
    let game = match number {
        Some(n) => Game::new(dictionary, n),
        None => Game::random(dictionary, &mut rand::thread_rng()),
    };
    let Some(mut game) = game else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("no such game in a dictionary of {} words", dictionary.len()),
        ));
    };
    log::info!("playing game {}", game.number());
    println!("Playing wordle - number {}:", game.number());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    while game.status() == GameStatus::InProgress {
        print!("{}/{}> ", MAX_TRIES - game.remaining_attempts() + 1, MAX_TRIES);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let guess = line.trim().to_lowercase();
        if guess.is_empty() {
            continue;
        }

        match game.guess(&guess) {
            Ok(pattern) => {
                println!("{} {}   {}", guess.to_uppercase(), pattern, keyboard_line(&game));
            }
            Err(err) => println!("{}", err),
        }
    }

    match (game.status(), game.reveal()) {
        (GameStatus::Won, _) => println!("Solved in {} guesses!", game.attempts().len()),
        (GameStatus::Lost, Some(word)) => println!("Failed to solve, the word was {}.", word.to_uppercase()),
        _ => {}
    }
    Ok(())
}

fn run_solve(dictionary: &Dictionary, data: &str) -> ExitCode {
    let mut model = ConstraintModel::new();
    if let Err(err) = model.apply_encoded(data) {
        eprintln!("wordle-sieve: {}", err);
        return ExitCode::FAILURE;
    }
    log::debug!("solver data: {}", model);

    let candidates = filter(&model, dictionary);
    if candidates.is_empty() {
        println!("No solution");
        return ExitCode::SUCCESS;
    }
    println!("Possibilities:");
    for word in candidates.sorted() {
        println!(" {}", word);
    }
    if let Some(best) = select_best(&candidates) {
        println!("Suggesting to try {}", best);
    }
    ExitCode::SUCCESS
}

fn run_stats(dictionary: &Dictionary, depth: usize, width: usize, show: usize) {
    let start = Instant::now();
    print!("{}", LetterReport::new(dictionary));
    let tree = build_opening_report(dictionary, depth, width).with_display_depth(show);
    println!();
    println!("{}", tree);
    log::info!("statistics computed in {:.2?}", start.elapsed());
}

fn run_assist(dictionary: &Dictionary) -> io::Result<()> {
    let mut solver = WordleSolver::new(dictionary);
    println!("Enter '<guess> <feedback>' (e.g. 'crane gybbb'), 'suggest', 'remaining', 'reset' or 'quit'.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            [] => continue,
            ["quit" | "exit" | "q"] => break,
            ["reset"] => {
                solver.reset();
                println!("Reset to initial state. {} words available.", solver.remaining_count());
            }
            ["suggest" | "s"] => match solver.suggest() {
                Some(suggestion) => println!("Suggesting to try {}", suggestion.word),
                None => println!("No possible words remaining. Use 'reset' to start over."),
            },
            ["remaining" | "r"] => {
                let words = solver.candidates().sorted();
                println!("Remaining possibilities: {}", words.len());
                for chunk in words.chunks(10) {
                    let row: Vec<&str> = chunk.iter().map(|w| w.as_str()).collect();
                    println!("  {}", row.join(" "));
                }
            }
            [guess, feedback] => {
                let Ok(word) = guess.to_lowercase().parse::<Word>() else {
                    println!("{} is not a five-letter word.", guess);
                    continue;
                };
                let Some(pattern) = FeedbackPattern::parse(feedback) else {
                    println!("Invalid feedback: {}", feedback);
                    println!("Use r/g=right, w/y=wrong position, n/b=not in word (5 characters)");
                    continue;
                };

                let before = solver.remaining_count();
                match solver.apply_feedback(&word, pattern) {
                    Ok(()) => println!(
                        "{} {}  eliminated {} words ({} → {})",
                        word.to_uppercase(),
                        pattern,
                        before - solver.remaining_count(),
                        before,
                        solver.remaining_count()
                    ),
                    Err(err) => println!("{}", err),
                }
            }
            _ => println!("Unknown command: {}", line.trim()),
        }
    }
    Ok(())
}

fn run_benchmark(dictionary: &Dictionary) {
    let threads = config::init_rayon_threads();
    log::info!("benchmarking {} words on {} threads", dictionary.len(), threads);

    let start = Instant::now();
    let benchmark = benchmark_guess_distribution(dictionary);
    let elapsed = start.elapsed();

    println!("Guess distribution:");
    for (guesses, count) in &benchmark.distribution {
        let pct = *count as f64 / benchmark.total.max(1) as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / benchmark.total.max(1)).max(1));
        println!("  {} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
    }
    println!();
    println!("Average guesses: {:.3}", benchmark.average_guesses());
    println!("Total words: {}", benchmark.total);
    println!("Words not solved in {} guesses: {}", MAX_TRIES, benchmark.failures);
    println!("Time elapsed: {:.2?}", elapsed);
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let dictionary = match load(cli.dictionary.as_ref()) {
        Ok(dictionary) => dictionary,
        Err(err) => {
            log::error!("failed to load dictionary: {:?}", err);
            eprintln!("wordle-sieve: {}", err);
            return ExitCode::FAILURE;
        }
    };
    log::info!("dictionary ready: {} words", dictionary.len());
    let collisions = dictionary.collisions();
    log::debug!(
        "hash collisions: {} buckets, longest chain {}",
        collisions.buckets,
        collisions.max_chain
    );

    let result = match cli.command.unwrap_or(Command::Play { game: None }) {
        Command::Play { game } => run_play(&dictionary, game),
        Command::Solve { data } => return run_solve(&dictionary, &data),
        Command::Stats { depth, width, show } => {
            run_stats(&dictionary, depth, width, show);
            Ok(())
        }
        Command::Assist => run_assist(&dictionary),
        Command::Benchmark => {
            run_benchmark(&dictionary);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("wordle-sieve: {}", err);
            ExitCode::FAILURE
        }
    }
}
