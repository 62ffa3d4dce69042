//! Strata CLI: the command-line interface for the row-based gate placer.
//!
//! Provides `strata read_ckt` for netlist statistics and `strata place` for
//! initial placement plus simulated annealing refinement.

#![warn(missing_docs)]

mod pipeline;
mod place;
mod read_ckt;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Strata: a row-based standard-cell placer.
#[derive(Parser, Debug)]
#[command(name = "strata", version, about = "Strata row-based gate placer")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `strata.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a netlist and write its statistics report.
    #[command(name = "read_ckt")]
    ReadCkt(ReadCktArgs),
    /// Parse, place and anneal a netlist.
    Place(PlaceArgs),
}

/// Arguments for the `strata read_ckt` subcommand.
#[derive(Parser, Debug)]
pub struct ReadCktArgs {
    /// Netlist file.
    pub file: String,

    /// Statistics report path.
    #[arg(short, long, default_value = "ckt_details.txt")]
    pub output: String,
}

/// Arguments for the `strata place` subcommand.
#[derive(Parser, Debug)]
pub struct PlaceArgs {
    /// Netlist file.
    pub file: String,

    /// Evaluate wirelength on all cores.
    #[arg(long)]
    pub thread: bool,

    /// RNG seed, overriding the config file.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Placement report path.
    #[arg(short, long, default_value = "placement_details.txt")]
    pub output: String,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Placement report format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text.
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a config file.
    pub config: Option<String>,
}

impl GlobalArgs {
    /// Log filter implied by `-q`/`-v`; `RUST_LOG` still overrides it.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

fn main() {
    // Usage errors exit with 1 like every other failure; help and version
    // keep clap's own exit.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    let color = match cli.color {
        ColorChoice::Auto => std::env::var("TERM").is_ok(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(global.log_level()))
        .init();

    let result = match cli.command {
        Command::ReadCkt(ref args) => read_ckt::run(args, &global),
        Command::Place(ref args) => place::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
