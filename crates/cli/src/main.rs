//! Counter testbench CLI.
//!
//! This binary drives the counter model and reports each cycle on stdout. It performs:
//! 1. **Run:** Execute the reset sequence and clock cycles, optionally capturing `counter.vcd`.
//! 2. **Clean:** Remove the waveform artifact left by a previous run.
//!
//! With no subcommand it runs with the built-in defaults (100 cycles, 5 in reset).

use std::fs;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use clocktb_core::config::Config;
use clocktb_core::sim::{self, SimContext};

#[derive(Parser, Debug)]
#[command(
    name = "counter_tb",
    author,
    version,
    about = "Cycle-driven testbench for the RTL counter model",
    long_about = "Hold the counter in reset, release it, and clock it for a fixed number of cycles.\n\nEach cycle prints `Cycle <n>: count = <value>` on stdout. Logging goes to stderr (set RUST_LOG).\n\nExamples:\n  counter_tb\n  counter_tb run --cycles 300 --width 4\n  counter_tb run --config tb.json --no-trace\n  counter_tb clean"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the testbench (default).
    Run(RunArgs),

    /// Remove the waveform artifact.
    Clean {
        /// JSON configuration naming the trace path.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// JSON configuration file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of clock cycles.
    #[arg(long)]
    cycles: Option<u64>,

    /// Cycles held in reset before counting starts.
    #[arg(long)]
    reset_cycles: Option<u64>,

    /// Counter width in bits.
    #[arg(long)]
    width: Option<u32>,

    /// Waveform output path.
    #[arg(long)]
    trace_file: Option<PathBuf>,

    /// Disable waveform capture.
    #[arg(long)]
    no_trace: bool,

    /// Print run statistics to stderr when done.
    #[arg(long)]
    stats: bool,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Run(args)) => cmd_run(&args),
        None => cmd_run(&RunArgs::default()),
        Some(Commands::Clean { config }) => cmd_clean(config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Installs the stderr subscriber; `RUST_LOG` overrides the `warn` default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    })
}

/// Builds the effective config and runs the counter to completion.
fn cmd_run(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(args.config.as_ref())?;
    if let Some(cycles) = args.cycles {
        config.run.cycles = cycles;
    }
    if let Some(reset_cycles) = args.reset_cycles {
        config.run.reset_cycles = reset_cycles;
    }
    if let Some(width) = args.width {
        config.dut.width = width;
    }
    if let Some(path) = &args.trace_file {
        config.trace.path.clone_from(path);
    }
    if args.no_trace {
        config.trace.enabled = false;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = sim::run_counter(&config, SimContext::new(), &mut out)?;

    if args.stats {
        stats.write_report(&mut io::stderr().lock())?;
    }
    Ok(())
}

/// Deletes the configured trace artifact if present.
fn cmd_clean(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config.as_ref())?;
    let path = &config.trace.path;
    match fs::remove_file(path) {
        Ok(()) => {
            info!(path = %path.display(), "removed trace artifact");
            println!("Removed {}", path.display());
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!("Nothing to clean: {} not found", path.display());
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
