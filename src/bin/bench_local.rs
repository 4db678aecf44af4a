//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! Loads the dictionary once, then solves every built-in sample cryptogram a
//! few times and reports the median wall-clock time per sample.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:        `cargo run --bin bench_local --release`
//! - Multiple repeats:       `cargo run --bin bench_local --release -- -r 5`
//! - Print the answers:      `cargo run --bin bench_local --release -- -p`
//!
//! Numbers are only comparable on the same machine with `--release`.

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;

use cryptogram::samples::SAMPLE_CRYPTOGRAMS;
use cryptogram::{CryptogramSolver, Dictionary, Solution};

/// Time the solver on the built-in samples.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words_alpha.txt")
    )]
    dictionary: String,

    /// Number of repeats per sample (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Print each sample's best answer
    #[arg(short = 'p', long = "print")]
    print_answers: bool,
}

/// Width of the sample column in the summary.
const SAMPLE_COLUMN: usize = 40;

/// Median of a small sample of durations.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

/// First `width` characters of `text`, with an ellipsis if it was cut.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        format!("{}…", text.chars().take(width - 1).collect::<String>())
    } else {
        text.to_string()
    }
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    cryptogram::log::init_logger(false);

    // dictionary loading is not part of the per-sample timing
    eprintln!("Loading dictionary from: {}", cli.dictionary);
    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    let solver = CryptogramSolver::new(dictionary);
    eprintln!(
        "Loaded {} words in {:.3}s",
        solver.dictionary().len(),
        t_load.elapsed().as_secs_f64()
    );

    let repeats = cli.num_repeats.max(1);
    let mut summary: Vec<(String, f64, Solution)> = Vec::with_capacity(SAMPLE_CRYPTOGRAMS.len());

    for (idx, sample) in SAMPLE_CRYPTOGRAMS.iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx, truncate(sample, 60));

        let mut times = Vec::with_capacity(repeats);
        let mut last = None;
        for rep in 0..repeats {
            let t_solve = Instant::now();
            let best = solver.find_best(black_box(sample));
            let secs = t_solve.elapsed().as_secs_f64();
            eprintln!("  run {:>2}/{:>2}: {:.3}s ({})", rep + 1, repeats, secs, best.score);
            times.push(secs);
            last = Some(best);
        }

        if let Some(best) = last {
            if cli.print_answers {
                println!("{}", best.answer);
            }
            summary.push((sample.to_string(), median(times), best));
        }
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<SAMPLE_COLUMN$} | {:>10} | {:>6} | {:>9}", "sample", "median (s)", "words", "ambiguity");
    eprintln!("{:-<SAMPLE_COLUMN$}-+-{:-<10}-+-{:-<6}-+-{:-<9}", "", "", "", "");
    for (sample, med, best) in &summary {
        eprintln!(
            "{:<SAMPLE_COLUMN$} | {med:>10.3} | {:>6} | {:>9}",
            truncate(sample, SAMPLE_COLUMN),
            best.score.recognized_words,
            best.score.ambiguity
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijk", 5), "abcd…");
    }
}
