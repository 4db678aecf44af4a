use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use rand::seq::SliceRandom;

use cryptogram::errors::DictionaryError;
use cryptogram::samples::SAMPLE_CRYPTOGRAMS;
use cryptogram::{encrypt, CryptogramSolver, Dictionary};

/// Cryptogram solver for simple substitution ciphers
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// The cryptogram to solve (a built-in sample is used when omitted)
    cryptogram: Vec<String>,

    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words_alpha.txt")
    )]
    dictionary: String,

    /// Use built-in sample N (0-based) instead of a random one
    #[arg(short, long)]
    sample: Option<usize>,

    /// Encrypt the text with a random key instead of solving it
    #[arg(short, long)]
    encrypt: bool,
}

/// Entry point of the cryptogram CLI.
///
/// Delegates to [`try_main`], printing any error in detail before exiting
/// with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var(cryptogram::log::DEBUG_ENV_VAR).is_ok();
    cryptogram::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(dictionary_err) = e.downcast_ref::<DictionaryError>() {
            eprintln!("Error: {}", dictionary_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Pick the text to work on: the command-line words, else the requested or a
/// random sample.
fn choose_text(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    if !cli.cryptogram.is_empty() {
        return Ok(cli.cryptogram.join(" "));
    }

    let sample = match cli.sample {
        Some(n) => SAMPLE_CRYPTOGRAMS.get(n).ok_or_else(|| {
            format!("sample {n} does not exist (there are {} samples)", SAMPLE_CRYPTOGRAMS.len())
        })?,
        None => SAMPLE_CRYPTOGRAMS
            .choose(&mut rand::thread_rng())
            .ok_or("no samples available")?,
    };
    Ok((*sample).to_string())
}

/// Core application logic:
/// 1. Parse CLI arguments.
/// 2. Either encrypt the text, or
/// 3. load the dictionary, solve, and print the best answer.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let text = choose_text(&cli)?;

    if cli.encrypt {
        println!("{}", encrypt::create_cryptogram(&text, &mut rand::thread_rng()));
        return Ok(());
    }

    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    let solver = CryptogramSolver::new(dictionary);
    let load_secs = t_load.elapsed().as_secs_f64();

    println!();
    println!("CRYPTOGRAM:");
    println!("     {text}");
    println!();

    let t_solve = Instant::now();
    let best = solver.find_best(&text);
    let solve_secs = t_solve.elapsed().as_secs_f64();

    println!("RESULT:");
    println!("     {}", best.answer);
    println!();

    eprintln!(
        "Loaded {} words ({} templates) in {:.3}s; solved in {:.3}s ({}).",
        solver.dictionary().len(),
        solver.template_index().len(),
        load_secs,
        solve_secs,
        best.score
    );

    Ok(())
}
