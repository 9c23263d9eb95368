use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use horsecost_cli::commands::{self, CommandOutput};
use horsecost_cli::config::Defaults;
use horsecost_cli::{export, logging};

/// Cost calculators for horse ownership: clipping, worming, body weight,
/// transport, loaning, rugs, and retirement projections.
///
/// Figures come from the built-in 2026 UK pricing tables; a
/// `horsecost.toml` in the working directory can set the default region
/// and inflation rate.
#[derive(Parser, Debug)]
#[command(name = "horsecost")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a TOML defaults file (default: ./horsecost.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Append the breakdown to a CSV file
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Annual clipping cost, professional or DIY
    Clip(commands::clip::ClipArgs),
    /// Annual worming program cost
    Worm(commands::worm::WormArgs),
    /// Body weight estimate from girth and length
    Weight(commands::weight::WeightArgs),
    /// Cost of one journey
    Transport(commands::transport::TransportArgs),
    /// Owning outright versus taking a horse on loan
    Loan(commands::loan::LoanArgs),
    /// Rug wardrobe cost, upfront and per year
    Rugs(commands::rugs::RugsArgs),
    /// Projected cost of retirement care
    Retire(commands::retire::RetireArgs),
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let defaults = Defaults::load(args.config.as_deref())?;

    let output: CommandOutput = match &args.command {
        Command::Clip(clip_args) => commands::clip::run(clip_args, &defaults)?,
        Command::Worm(worm_args) => commands::worm::run(worm_args, &defaults)?,
        Command::Weight(weight_args) => commands::weight::run(weight_args, &defaults)?,
        Command::Transport(transport_args) => commands::transport::run(transport_args, &defaults)?,
        Command::Loan(loan_args) => commands::loan::run(loan_args, &defaults)?,
        Command::Rugs(rugs_args) => commands::rugs::run(rugs_args, &defaults)?,
        Command::Retire(retire_args) => commands::retire::run(retire_args, &defaults)?,
    };

    if let Some(csv_path) = &args.csv {
        let rows = export::append(csv_path, output.calculator, &output.lines)?;
        info!(rows, path = %csv_path.display(), "breakdown exported");
    }

    Ok(())
}
