//! Cache hierarchy simulator CLI.
//!
//! This binary replays a memory trace through a configured cache hierarchy. It performs:
//! 1. **Config load:** Reads a JSON file listing the cache levels, closest to the processor first.
//! 2. **Trace replay:** Streams every `<access-type> <hex-address>` line through the hierarchy in order.
//! 3. **Report:** Prints per-level hits/misses and main-memory accesses as JSON, or a summary table.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cachesim_core::sim::simulate_files;

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Trace-driven multi-level cache simulator",
    long_about = "Replay a memory trace through a cache hierarchy and report hits and misses per level.\n\nExamples:\n  cachesim configs/l1l2.json traces/gcc.trace\n  cachesim --summary configs/l1.json traces/ls.trace\n  RUST_LOG=debug cachesim configs/l1l2l3.json traces/leela.trace"
)]
struct Cli {
    /// JSON cache configuration (`{"caches": [...]}`).
    config: PathBuf,

    /// Trace file, one `<access-type> <hex-address>` per line.
    trace: PathBuf,

    /// Print a human-readable table instead of JSON.
    #[arg(short, long)]
    summary: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Installs a stderr `tracing` subscriber; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = match simulate_files(&cli.config, &cli.trace) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            process::exit(1);
        }
    };

    if cli.summary {
        report.print();
        return;
    }

    match report.to_json_pretty() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("[!] FATAL: could not serialize report: {e}");
            process::exit(1);
        }
    }
}
