//! Benchmark runner for the substring searchers
//!
//! Checks every searcher for correctness, then times each one and prints a
//! JSON report.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use bm_search::baselines::*;
use bm_search::config::BenchConfig;
use bm_search::{
    corpus, verify_find, BoyerMoore, BoyerMooreSearcher, RecordingObserver, SubstringSearcher,
};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(about = "Benchmark Boyer-Moore against baseline substring searchers")]
struct Args {
    /// JSON benchmark config
    #[arg(long, conflicts_with = "stdin")]
    config: Option<PathBuf>,

    /// Read the JSON config from standard input
    #[arg(long)]
    stdin: bool,

    /// Print the search trace for one pattern/text pair and exit
    #[arg(long, num_args = 2, value_names = ["PATTERN", "TEXT"])]
    trace: Option<Vec<String>>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct BenchmarkResult {
    name: String,
    searches_per_second: f64,
    total_time_ns: u64,
    iterations: u64,
}

#[derive(Serialize)]
struct FullResults<'a> {
    config: &'a BenchConfig,
    results: Vec<BenchmarkResult>,
    correct: bool,
}

fn verify_correctness<S: SubstringSearcher>(
    searcher: &S,
    name: &str,
    cases: &[(Vec<u8>, Vec<u8>)],
) -> bool {
    let fixed: [(&[u8], &[u8]); 8] = [
        (&b"XXABCXX"[..], &b"ABC"[..]),
        (&b"AAAA"[..], &b"AAA"[..]),
        (&b"abcdef"[..], &b"NOTFOUND"[..]),
        (&b"anything"[..], &b""[..]),
        (&b"ABABABAB"[..], &b"ABAB"[..]),
        (&b"GCATCGCAGAGAGTATACAGTACG"[..], &b"GCAGAGAG"[..]),
        (&b"BAAA"[..], &b"AAA"[..]),
        (&b""[..], &b"a"[..]),
    ];

    let all = fixed
        .iter()
        .copied()
        .chain(cases.iter().map(|(t, p)| (t.as_slice(), p.as_slice())));

    for (haystack, needle) in all {
        let result = searcher.find(haystack, needle);
        if !verify_find(haystack, needle, result) {
            log::error!(
                "{}: find({:?}, {:?}) = {:?}",
                name,
                String::from_utf8_lossy(&haystack[..haystack.len().min(64)]),
                String::from_utf8_lossy(needle),
                result
            );
            return false;
        }
    }
    true
}

fn benchmark<S: SubstringSearcher>(
    searcher: &S,
    name: &str,
    cases: &[(Vec<u8>, Vec<u8>)],
    config: &BenchConfig,
) -> BenchmarkResult {
    // Warmup
    for _ in 0..config.warmup_iterations {
        for (haystack, needle) in cases {
            let _ = searcher.find(haystack, needle);
        }
    }

    let target_time = Duration::from_millis(config.target_time_ms);
    let mut total_iterations: u64 = 0;
    let start = Instant::now();

    while start.elapsed() < target_time {
        for (haystack, needle) in cases {
            let _ = searcher.find(haystack, needle);
        }
        total_iterations += cases.len() as u64;
    }

    let elapsed = start.elapsed();
    let searches_per_second = total_iterations as f64 / elapsed.as_secs_f64();
    log::info!("{}: {:.0} searches/s", name, searches_per_second);

    BenchmarkResult {
        name: name.to_string(),
        searches_per_second,
        total_time_ns: elapsed.as_nanos() as u64,
        iterations: total_iterations,
    }
}

fn load_config(args: &Args) -> anyhow::Result<BenchConfig> {
    if let Some(path) = &args.config {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        return BenchConfig::from_reader(file)
            .with_context(|| format!("loading {}", path.display()));
    }
    if args.stdin {
        return BenchConfig::from_reader(io::stdin().lock())
            .context("loading config from stdin");
    }
    Ok(BenchConfig::default())
}

fn trace(pattern: &str, text: &str) -> anyhow::Result<()> {
    let mut recorder = RecordingObserver::new();
    let bm = BoyerMoore::new_with(pattern.as_bytes(), &mut recorder);
    bm.find_with(text.as_bytes(), &mut recorder);
    println!("{}", serde_json::to_string_pretty(recorder.events())?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Some(pair) = &args.trace {
        return trace(&pair[0], &pair[1]);
    }

    let config = load_config(&args)?;
    let mut cases = config.byte_cases();
    if config.include_generated {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        cases.extend(corpus::generate(&mut rng));
    }
    log::info!("{} cases, {} ms per searcher", cases.len(), config.target_time_ms);

    let all_correct = verify_correctness(&NaiveSearcher, "naive", &cases)
        && verify_correctness(&MemchrSearcher, "memchr", &cases)
        && verify_correctness(&HorspoolSearcher, "horspool", &cases)
        && verify_correctness(&BoyerMooreSearcher, "boyer-moore", &cases);

    if !all_correct {
        let results = FullResults {
            config: &config,
            results: vec![],
            correct: false,
        };
        println!("{}", serde_json::to_string(&results)?);
        bail!("correctness check failed");
    }

    let results = vec![
        benchmark(&NaiveSearcher, "naive", &cases, &config),
        benchmark(&MemchrSearcher, "memchr", &cases, &config),
        benchmark(&HorspoolSearcher, "horspool", &cases, &config),
        benchmark(&BoyerMooreSearcher, "boyer-moore", &cases, &config),
    ];

    let full_results = FullResults {
        config: &config,
        results,
        correct: true,
    };
    println!("{}", serde_json::to_string(&full_results)?);
    Ok(())
}
