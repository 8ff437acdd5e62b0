//! Probe: wall time and resident memory across target sizes.
//!
//! Plants a known query inside random targets of doubling length, runs
//! the infix search, and reports one CSV line per size to stderr.
//!
//! Run with:
//! `cargo run --example trace_probe -- --query-len 64 --max-target 131072`

use std::env;
use std::time::Instant;

use infix_align::{infix_levenshtein, EditCosts};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("trace_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let mut rng = StdRng::seed_from_u64(42);
    let query = random_dna(&mut rng, options.query_len);

    eprintln!("target_len,wall_s,rss_delta_kib,distance,hits,status");

    let mut target_len = 1024usize;
    while target_len <= options.max_target {
        let mut target = random_dna(&mut rng, target_len);
        let planted = target_len / 2;
        target[planted..planted + query.len()].copy_from_slice(&query);

        let before = rss_kib();
        let start = Instant::now();
        let (distance, hits) =
            infix_levenshtein(&query, &target, EditCosts::default()).expect("target is non-empty");
        let wall = start.elapsed().as_secs_f64();
        let after = rss_kib();

        let planted_end = planted + query.len() - 1;
        let status = if hits.iter().any(|h| h.end() == planted_end) {
            "found_planted"
        } else {
            "planted_missed"
        };
        eprintln!(
            "{target_len},{wall:.3},{},{distance},{},{status}",
            after.saturating_sub(before),
            hits.len()
        );

        target_len *= 2;
    }
}

struct Options {
    query_len: usize,
    max_target: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut query_len = 32usize;
        let mut max_target = 65_536usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--query-len=") {
                query_len = parse_positive(value, "query length")?;
            } else if arg == "--query-len" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --query-len".to_string())?
                    .into();
                query_len = parse_positive(&value, "query length")?;
            } else if let Some(value) = arg.strip_prefix("--max-target=") {
                max_target = parse_positive(value, "max target length")?;
            } else if arg == "--max-target" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --max-target".to_string())?
                    .into();
                max_target = parse_positive(&value, "max target length")?;
            } else {
                return Err(format!("unrecognized argument: {arg}"));
            }
        }

        if query_len == 0 || query_len > 512 {
            return Err("query length must be between 1 and 512".to_string());
        }
        if max_target < 1024 {
            return Err("max target length must be at least 1024".to_string());
        }
        Ok(Self {
            query_len,
            max_target,
        })
    }

    fn print_help() {
        eprintln!("usage: trace_probe [--query-len N] [--max-target N]");
        eprintln!("  --query-len N   planted query length, 1..=512 (default 32)");
        eprintln!("  --max-target N  largest target length probed (default 65536)");
    }
}

fn parse_positive(value: &str, what: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{what} must be a positive integer"))
}

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = sys.process(get_current_pid().unwrap()) {
        p.memory() // KiB on supported platforms
    } else {
        0
    }
}
