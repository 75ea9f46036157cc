//! A thin profiling harness: build an automaton from a pattern file and
//! repeatedly match it against an input file, reporting elapsed time.
//!
//! Usage: `profile <patterns-file> <input-file> [num-patterns] [iterations]`

use std::process::ExitCode;
use std::time::Instant;

use daac::{load_patterns, Builder};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "usage: {} <patterns-file> <input-file> [num-patterns] [iterations]",
            args.first().map(String::as_str).unwrap_or("profile")
        );
        return ExitCode::FAILURE;
    }

    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: &[String]) -> daac::Result<()> {
    let mut patterns = load_patterns(&args[1])?;

    if let Some(n) = args.get(3) {
        let n: usize = n.parse().map_err(|_| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "num-patterns must be a number")
        })?;
        patterns.truncate(n);
    }

    let input = std::fs::read(&args[2])?;

    let iterations: usize = match args.get(4) {
        Some(s) => s
            .parse()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::InvalidInput, "iterations must be a number"))?,
        None => 1000,
    };

    let mut builder = Builder::new();
    builder.insert_all(patterns.iter())?;
    let ac = builder.build();

    println!(
        "running automaton {} times on {} bytes of data using {} patterns",
        iterations,
        input.len(),
        ac.num_patterns(),
    );

    let start = Instant::now();
    let mut last_count = 0;
    for _ in 0..iterations {
        last_count = ac.match_all(&input).len();
    }
    let elapsed = start.elapsed();

    println!("done in {elapsed:?} ({last_count} matches on the last run)");
    Ok(())
}
