// crates/mindiff-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use mindiff_core::{
    generator::generate_weights,
    io::{read_weights_file, read_weights_line, render_report, write_report_json, JsonReport, PROMPT},
    solve, SolverOptions, Weight, WeightList,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "mindiff",
    about = "Split an even number of weights into two equal-size teams with minimal difference",
    long_about = "Split an even number of weights into two equal-size teams with minimal difference.\n\nWeights are read from a file (whitespace-separated) or, without a file, from one line on stdin.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Partition weights read from FILE (or one line of stdin).
    Solve {
        /// Whitespace-separated weights; reading stops at the first non-numeric token.
        file: Option<PathBuf>,

        /// Output format on stdout.
        #[arg(long, value_enum, default_value_t = FormatOpt::Text)]
        format: FormatOpt,

        /// Also write the JSON result to this path.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Reachability table cell budget (overrides MINDIFF_MAX_TABLE_CELLS).
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        max_table_cells: Option<u64>,
    },

    /// Write a deterministic synthetic weight file.
    Generate {
        /// Number of weights (even, >0) so the file is solvable as written
        #[arg(long, default_value_t = 16, value_parser = parse_even_count)]
        n: u32,

        /// Largest weight value
        #[arg(long, default_value_t = 100)]
        max_weight: u32,

        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output path
        #[arg(long, default_value = "weights.txt")]
        out: PathBuf,
    },
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum FormatOpt {
    /// Two labeled teams with 1-based positions and totals
    Text,
    /// Pretty JSON document
    Json,
}

fn parse_even_count(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|e| format!("{e}"))?;
    if n == 0 || n % 2 != 0 {
        return Err(format!("{n} is not a positive even count"));
    }
    Ok(n)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let res = match cli.cmd {
        Cmd::Solve {
            file,
            format,
            out,
            max_table_cells,
        } => run_solve(file.as_deref(), format, out.as_deref(), max_table_cells),

        Cmd::Generate {
            n,
            max_weight,
            seed,
            out,
        } => generate(n, max_weight, seed, &out),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // One-line diagnostic: outermost context plus root cause.
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with an env-driven filter (default WARN, raised by `-v`).
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Ensure the parent directory for a file exists.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", dir.display()))?;
        }
    }
    Ok(())
}

/// Read weights from `file`, or prompt for one line of stdin.
///
/// The prompt goes to stderr under `--format json` so stdout stays a single
/// JSON document.
fn read_input(file: Option<&Path>, format: FormatOpt) -> Result<Vec<Weight>> {
    if let Some(path) = file {
        info!(path = %path.display(), "reading weights from file");
        return Ok(read_weights_file(path)?);
    }

    match format {
        FormatOpt::Text => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{PROMPT}")?;
            stdout.flush()?;
        }
        FormatOpt::Json => {
            let mut stderr = io::stderr().lock();
            writeln!(stderr, "{PROMPT}")?;
            stderr.flush()?;
        }
    }
    Ok(read_weights_line(io::stdin().lock())?)
}

fn run_solve(
    file: Option<&Path>,
    format: FormatOpt,
    out: Option<&Path>,
    max_table_cells: Option<u64>,
) -> Result<()> {
    let mut opts = SolverOptions::from_env();
    if let Some(cells) = max_table_cells {
        opts = opts.with_max_table_cells(cells);
    }

    let raw = read_input(file, format)?;
    info!(n = raw.len(), "read weights");
    let weights = WeightList::new(raw)?;

    let partition = solve(&weights, &opts)?;
    info!(
        sum_a = partition.sum_a,
        sum_b = partition.sum_b,
        difference = partition.difference(),
        "solved"
    );

    // Sums are re-checked here for every output path, not only the text one.
    let report = JsonReport::new(&weights, &partition)?;
    match format {
        FormatOpt::Text => print!("{}", render_report(&weights, &partition)?),
        FormatOpt::Json => println!(
            "{}",
            report.to_json_pretty().context("serialize result to JSON")?
        ),
    }

    if let Some(path) = out {
        write_report_json(path, &report)
            .with_context(|| format!("writing result to {}", path.display()))?;
        info!(path = %path.display(), "wrote JSON result");
    }
    Ok(())
}

fn generate(n: u32, max_weight: u32, seed: u64, out: &Path) -> Result<()> {
    info!(n, max_weight, seed, "generating synthetic weights");
    let weights = generate_weights(n as usize, max_weight, seed);

    ensure_parent_dir(out)?;
    let f = File::create(out).with_context(|| format!("create {}", out.display()))?;
    let mut w = BufWriter::new(f);
    for (i, x) in weights.iter().enumerate() {
        let sep = if (i + 1) % 16 == 0 { "\n" } else { " " };
        write!(w, "{x}{sep}")?;
    }
    writeln!(w)?;
    w.flush()?;

    println!("Generated {} weights (max {max_weight}, seed {seed}) → {}", weights.len(), out.display());
    Ok(())
}
