// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end.
//!
//! ```text
//! mixsearch <NUM_ZEROS> <NUM_ONES> <DEPTH> [--mantissa-bits N] [--legacy-frontier]
//!           [--metric successor|producer|path] [-v...]
//! ```
//!
//! Usage and argument errors go to stdout with exit code 1. Logs go to
//! stderr, filtered by `-v` or `RUST_LOG`.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use mixing_search::engine::{DiscoveryMetric, FrontierPolicy};
use mixing_search::{explore, ExplorePolicy, MixConfig, Reporter, State};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Enumerate every output of a mixing graph up to a given depth
#[derive(Parser, Debug)]
#[command(name = "mixsearch", version)]
struct Cli {
    /// Number of channels starting at 0
    num_zeros: usize,

    /// Number of channels starting at 1
    num_ones: usize,

    /// Number of mixing rounds (also the default mantissa width)
    depth: usize,

    /// Fixed-point mantissa width in bits (default: DEPTH)
    #[arg(long)]
    mantissa_bits: Option<u32>,

    /// Do not re-explore states whose metric improved
    #[arg(long)]
    legacy_frontier: bool,

    /// Metric recorded for a discovery: successor, producer or path
    #[arg(long, default_value_t = DiscoveryMetric::Successor)]
    metric: DiscoveryMetric,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            print!("{}", err.render());
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = match cli.mantissa_bits {
        Some(bits) => MixConfig::new(bits, cli.depth),
        None => MixConfig::from_depth(cli.depth),
    }
    .context("invalid configuration")?;

    let policy = ExplorePolicy {
        frontier: if cli.legacy_frontier {
            FrontierPolicy::Legacy
        } else {
            FrontierPolicy::Requeue
        },
        metric: cli.metric,
    };

    let initial = State::from_counts(cli.num_zeros, cli.num_ones, &config);
    let exploration = explore(config, policy, initial).context("exploration aborted")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    Reporter::new(&exploration)
        .write(&mut out)
        .context("failed to write report")?;
    out.flush()?;
    Ok(())
}
