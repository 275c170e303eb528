//! econlab CLI - command line front-end to the calculation engine
//!
//! Every calculator reads one JSON document and prints its result as JSON
//! on stdout; logs go to stderr.
//!
//! # Commands
//!
//! - `econlab appraise --input <file>` - NPV, IRR, payback and score
//! - `econlab breakeven --input <file>` - cost-volume-profit analysis
//! - `econlab decide --input <file>` - decision criteria over a payoff matrix
//! - `econlab tree --input <file>` - expected value of a decision tree
//! - `econlab auction --input <file>` - double auction clearing
//! - `econlab simulate --input <file>` - Monte Carlo run of a built-in model
//! - `econlab sensitivity --input <file>` - factor ranking for a built-in model
//! - `econlab earned-value --input <file>` - earned value analysis
//! - `econlab cosmic --input <file>` / `markii` - functional size measurement
//! - `econlab check` - print the effective configuration
//!
//! # Architecture
//!
//! As the service layer, this crate orchestrates the library crates and owns
//! every side effect: file and environment reads, logging and output.

use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod models;

use crate::config::EngineConfig;
pub use error::{CliError, Result};

/// econlab: economics calculation engine
#[derive(Parser)]
#[command(name = "econlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "econlab.toml")]
    config: String,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Path to the JSON input document (`-` for stdin)
    #[arg(short, long)]
    input: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Appraise an investment from its cash flows
    Appraise(InputArgs),

    /// Break-even and safety margin analysis
    Breakeven(InputArgs),

    /// Apply the decision criteria to a payoff matrix
    Decide(InputArgs),

    /// Evaluate a decision tree
    Tree(InputArgs),

    /// Clear a double auction
    Auction(InputArgs),

    /// Monte Carlo simulation of a built-in model
    Simulate(InputArgs),

    /// One-factor-at-a-time sensitivity analysis of a built-in model
    Sensitivity(InputArgs),

    /// Earned value analysis of project phases
    EarnedValue(InputArgs),

    /// COSMIC functional size
    Cosmic(InputArgs),

    /// MARK II function points
    Markii(InputArgs),

    /// IFPUG/NESMA function points
    #[command(alias = "ifpug")]
    FunctionPoints(InputArgs),

    /// Check system configuration
    Check,
}

fn init_tracing(log_level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = EngineConfig::load(&cli.config)?;
    config.validate()?;

    init_tracing(&config.log_level, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(file = %cli.config, ?config, "configuration loaded");

    let compact = cli.compact;
    match cli.command {
        Commands::Appraise(args) => commands::appraise::run(&args.input, compact, &config),
        Commands::Breakeven(args) => commands::breakeven::run(&args.input, compact),
        Commands::Decide(args) => commands::decide::run(&args.input, compact, &config),
        Commands::Tree(args) => commands::tree::run(&args.input, compact, &config),
        Commands::Auction(args) => commands::auction::run(&args.input, compact),
        Commands::Simulate(args) => commands::simulate::run(&args.input, compact, &config),
        Commands::Sensitivity(args) => commands::sensitivity::run(&args.input, compact),
        Commands::EarnedValue(args) => commands::earned_value::run(&args.input, compact),
        Commands::Cosmic(args) => commands::sizing::run_cosmic(&args.input, compact),
        Commands::Markii(args) => commands::sizing::run_markii(&args.input, compact),
        Commands::FunctionPoints(args) => {
            commands::sizing::run_function_points(&args.input, compact)
        }
        Commands::Check => commands::check::run(&cli.config, &config, compact),
    }
}
