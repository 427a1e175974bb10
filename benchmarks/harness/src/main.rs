//! mindiff-bench-harness
//!
//! Run end-to-end solves (generate -> table -> select -> reconstruct) and
//! append CSV rows into `benchmarks/reports/bench-<unix>.csv`.
//!
//! Usage examples:
//!   cargo run -p mindiff-bench-harness -- --profile benchmarks/profiles/small.toml
//!   cargo run --release -p mindiff-bench-harness -- --profile benchmarks/profiles/medium.toml

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Deserialize;

use mindiff_core::{
    generator::generate_weights, reconstruct, select_closest, ReachabilityTable, SolverOptions,
    WeightList,
};

#[derive(Debug, Deserialize)]
struct Profile {
    /// Number of weights (must be even)
    n: usize,
    /// Largest generated weight
    max_weight: u32,
    /// Base RNG seed; repeat `r` uses `seed + r`
    seed: u64,
    /// Repetitions of the whole pipeline
    repeats: u32,
}

fn parse_flag(name: &str, default: &str) -> String {
    let mut it = std::env::args().skip(1);
    while let Some(k) = it.next() {
        if k == format!("--{name}") {
            return it.next().unwrap_or_else(|| default.to_string());
        }
    }
    default.to_string()
}

fn dur_us(d: Duration) -> u128 {
    d.as_micros()
}

fn main() -> Result<()> {
    let profile_path = PathBuf::from(parse_flag("profile", "benchmarks/profiles/small.toml"));

    let profile_src = fs::read_to_string(&profile_path)
        .with_context(|| format!("read profile {}", profile_path.display()))?;
    let profile: Profile = toml::from_str(&profile_src).context("parse profile toml")?;
    println!(
        "Profile: n={}, max_weight={}, seed={}, repeats={}",
        profile.n, profile.max_weight, profile.seed, profile.repeats
    );

    let opts = SolverOptions::from_env();

    fs::create_dir_all("benchmarks/reports").context("create reports dir")?;
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before UNIX epoch")?
        .as_secs();
    let csv_path = PathBuf::from(format!("benchmarks/reports/bench-{ts}.csv"));
    let mut csv = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&csv_path)
        .with_context(|| format!("open {}", csv_path.display()))?;
    writeln!(csv, "timestamp,n,max_weight,repeat,stage,us,extra")?;

    for rep in 0..profile.repeats {
        let weights = WeightList::new(generate_weights(
            profile.n,
            profile.max_weight,
            profile.seed + u64::from(rep),
        ))
        .context("profile n must be even and non-zero")?;
        let row = |stage: &str, d: Duration, extra: String| {
            format!(
                "{ts},{},{},{rep},{stage},{},{extra}",
                profile.n,
                profile.max_weight,
                dur_us(d)
            )
        };

        // 1) table
        let t0 = Instant::now();
        let table = ReachabilityTable::build(&weights, &opts)?;
        writeln!(csv, "{}", row("table", t0.elapsed(), format!("cells={}", table.len())))?;

        // 2) select
        let t0 = Instant::now();
        let sel = select_closest(&table)?;
        writeln!(csv, "{}", row("select", t0.elapsed(), format!("best={}", sel.best)))?;

        // 3) reconstruct
        let t0 = Instant::now();
        let p = reconstruct(&table, &weights, &sel)?;
        writeln!(
            csv,
            "{}",
            row("reconstruct", t0.elapsed(), format!("difference={}", p.difference()))
        )?;
    }

    println!("Wrote report → {}", csv_path.display());
    Ok(())
}
